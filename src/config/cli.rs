use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "webinar-booking")]
#[command(about = "Book a seat on a webinar and notify its organizer")]
pub struct CliConfig {
    #[arg(long, default_value = "booking.toml", help = "TOML seed with users, webinars and participations")]
    pub config: String,

    #[arg(long)]
    pub webinar_id: String,

    #[arg(long)]
    pub user_id: String,

    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("--config", &self.config)?;
        validate_non_empty_string("--webinar-id", &self.webinar_id)?;
        validate_non_empty_string("--user-id", &self.user_id)?;
        Ok(())
    }
}
