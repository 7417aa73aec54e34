use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use webinar_booking::adapters;
use webinar_booking::core::UserRepository;
use webinar_booking::utils::error::{BookingError, ErrorCategory};
use webinar_booking::utils::{logger, validation::Validate};
use webinar_booking::{
    BookSeat, BookSeatRequest, BookingConfig, CliConfig, Executable, OutputFormat, Participation,
    TracingMailer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入種子配置 (日誌初始化前, 以便套用 [logging] 設定)
    let config = match BookingConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load {}: {}", cli.config, e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level()
    };
    if cli.json_logs || config.logging.json {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::info!("Starting webinar-booking CLI");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let store = adapters::seed(&config);
    let mailer = Arc::new(TracingMailer::new(config.notifications.sender.clone()));
    let use_case = BookSeat::new(
        store.participations.clone(),
        store.users.clone(),
        store.webinars.clone(),
        mailer,
    )
    .with_notification_policy(config.notifications.on_failure);

    let result = match store.users.find_by_id(&cli.user_id).await {
        Ok(Some(user)) => {
            use_case
                .execute(BookSeatRequest {
                    webinar_id: cli.webinar_id.clone(),
                    user,
                })
                .await
        }
        Ok(None) => Err(BookingError::UserNotFound {
            user_id: cli.user_id.clone(),
        }),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            let participation = Participation::new(cli.user_id.as_str(), cli.webinar_id.as_str());
            let taken = store
                .participations
                .snapshot()
                .await
                .iter()
                .filter(|p| p.webinar_id == cli.webinar_id)
                .count();
            tracing::info!("✅ Seat booked ({} seats taken)", taken);

            match cli.output {
                OutputFormat::Text => println!(
                    "✅ {} booked a seat on {}",
                    participation.user_id, participation.webinar_id
                ),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "booked",
                        "participation": participation,
                        "seats_taken": taken,
                    }))
                    .context("failed to render booking summary")?
                ),
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Booking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            if cli.output == OutputFormat::Json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "failed",
                        "category": format!("{:?}", e.category()),
                        "error": e.to_string(),
                    }))
                    .context("failed to render failure summary")?
                );
            }
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn exit_code(e: &BookingError) -> i32 {
    match e.category() {
        ErrorCategory::Business => 1,
        ErrorCategory::Notification => 2,
        ErrorCategory::Storage | ErrorCategory::Configuration | ErrorCategory::System => 3,
    }
}
