pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::adapters::in_memory::{
    InMemoryMailer, InMemoryParticipationRepository, InMemoryUserRepository,
    InMemoryWebinarRepository,
};
pub use crate::adapters::mailer::TracingMailer;
pub use crate::config::BookingConfig;
pub use crate::core::book_seat::{BookSeat, BookSeatRequest, NotificationPolicy};
pub use crate::core::{Email, Executable, Participation, User, Webinar};
pub use crate::utils::error::{BookingError, Result};
