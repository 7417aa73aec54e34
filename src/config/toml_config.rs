use crate::core::book_seat::NotificationPolicy;
use crate::core::{Participation, User, Webinar};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_date_order, validate_email, validate_non_empty_string, validate_positive_number,
    validate_unique_ids, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub webinars: Vec<Webinar>,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub on_failure: NotificationPolicy,
    pub sender: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}

impl BookingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${BOOKING_SENDER}), 未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Webinars whose organizer is not a seeded user. Bookings on them succeed without a notification.
    pub fn orphaned_webinars(&self) -> Vec<&Webinar> {
        let user_ids: HashSet<&str> = self.users.iter().map(|u| u.id.as_str()).collect();
        self.webinars
            .iter()
            .filter(|w| !user_ids.contains(w.organizer_id.as_str()))
            .collect()
    }

    fn validate_users(&self) -> Result<()> {
        validate_unique_ids("users.id", self.users.iter().map(|u| u.id.as_str()))?;
        for (i, user) in self.users.iter().enumerate() {
            validate_non_empty_string(&format!("users[{}].id", i), &user.id)?;
            validate_email(&format!("users[{}].email", i), &user.email)?;
        }
        Ok(())
    }

    fn validate_webinars(&self) -> Result<()> {
        validate_unique_ids("webinars.id", self.webinars.iter().map(|w| w.id.as_str()))?;
        for (i, webinar) in self.webinars.iter().enumerate() {
            validate_non_empty_string(&format!("webinars[{}].id", i), &webinar.id)?;
            validate_non_empty_string(&format!("webinars[{}].title", i), &webinar.title)?;
            validate_positive_number(&format!("webinars[{}].seats", i), webinar.seats, 1)?;
            validate_date_order(
                &format!("webinars[{}].start_date..end_date", i),
                &webinar.start_date,
                &webinar.end_date,
            )?;
        }
        Ok(())
    }

    /// Seeded participations must satisfy what booking itself guarantees:
    /// a known webinar, one seat per user, and no more seats than capacity.
    fn validate_participations(&self) -> Result<()> {
        let capacity: HashMap<&str, u32> = self
            .webinars
            .iter()
            .map(|w| (w.id.as_str(), w.seats))
            .collect();
        let mut seen = HashSet::new();
        let mut taken: HashMap<&str, u32> = HashMap::new();

        for (i, participation) in self.participations.iter().enumerate() {
            validate_non_empty_string(
                &format!("participations[{}].user_id", i),
                &participation.user_id,
            )?;

            let Some(&seats) = capacity.get(participation.webinar_id.as_str()) else {
                return Err(BookingError::InvalidConfigValueError {
                    field: format!("participations[{}].webinar_id", i),
                    value: participation.webinar_id.clone(),
                    reason: "Unknown webinar".to_string(),
                });
            };

            if !seen.insert((participation.user_id.as_str(), participation.webinar_id.as_str())) {
                return Err(BookingError::InvalidConfigValueError {
                    field: format!("participations[{}]", i),
                    value: format!("{}@{}", participation.user_id, participation.webinar_id),
                    reason: "User already holds a seat on this webinar".to_string(),
                });
            }

            let count = taken.entry(participation.webinar_id.as_str()).or_insert(0);
            *count += 1;
            if *count > seats {
                return Err(BookingError::InvalidConfigValueError {
                    field: format!("participations[{}]", i),
                    value: participation.webinar_id.clone(),
                    reason: format!("Webinar only has {} seats", seats),
                });
            }
        }
        Ok(())
    }
}

impl Validate for BookingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(sender) = &self.notifications.sender {
            if sender.contains("${") {
                return Err(BookingError::InvalidConfigValueError {
                    field: "notifications.sender".to_string(),
                    value: sender.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
            validate_email("notifications.sender", sender)?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(BookingError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        self.validate_users()?;
        self.validate_webinars()?;
        self.validate_participations()?;

        for webinar in self.orphaned_webinars() {
            tracing::warn!(
                "Organizer {} of webinar {} is not a known user; bookings will not be notified",
                webinar.organizer_id,
                webinar.id
            );
        }

        Ok(())
    }
}
