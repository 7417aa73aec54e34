use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Webinar not found: {webinar_id}")]
    WebinarNotFound { webinar_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("User already booked a seat for this webinar")]
    DuplicateBooking { user_id: String, webinar_id: String },

    #[error("Webinar is full")]
    WebinarFull { webinar_id: String, seats: u32 },

    /// The participation was already recorded when this is raised.
    #[error("Booking recorded but organizer notification failed: {message}")]
    Notification { message: String },

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Business,
    Notification,
    Storage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::WebinarNotFound { .. }
            | BookingError::UserNotFound { .. }
            | BookingError::DuplicateBooking { .. }
            | BookingError::WebinarFull { .. } => ErrorCategory::Business,
            BookingError::Notification { .. } => ErrorCategory::Notification,
            BookingError::Repository { .. } => ErrorCategory::Storage,
            BookingError::TomlError(_)
            | BookingError::ConfigError { .. }
            | BookingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BookingError::IoError(_) | BookingError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Business => ErrorSeverity::High,
            ErrorCategory::Notification => ErrorSeverity::Medium,
            ErrorCategory::Storage | ErrorCategory::Configuration | ErrorCategory::System => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Business rejections are final for the request; nothing here is retried internally.
    pub fn is_rejection(&self) -> bool {
        self.category() == ErrorCategory::Business
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::WebinarNotFound { .. } => "Check the webinar id and try again",
            BookingError::UserNotFound { .. } => "Check the user id against the seeded users",
            BookingError::DuplicateBooking { .. } => "No action needed, the seat is already yours",
            BookingError::WebinarFull { .. } => "Pick another webinar or wait for a new session",
            BookingError::Notification { .. } => {
                "The seat is booked; notify the organizer manually or check the mailer"
            }
            BookingError::Repository { .. } => "Check the storage backend",
            BookingError::IoError(_) => "Check that the file exists and is readable",
            BookingError::SerializationError(_) => "Check the data format",
            BookingError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            BookingError::ConfigError { .. } | BookingError::InvalidConfigValueError { .. } => {
                "Fix the configuration and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::WebinarNotFound { webinar_id } => {
                format!("Webinar '{}' does not exist", webinar_id)
            }
            BookingError::UserNotFound { user_id } => format!("User '{}' does not exist", user_id),
            BookingError::DuplicateBooking { webinar_id, .. } => {
                format!("You already have a seat for webinar '{}'", webinar_id)
            }
            BookingError::WebinarFull { webinar_id, seats } => format!(
                "Webinar '{}' is full (all {} seats are taken)",
                webinar_id, seats
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
