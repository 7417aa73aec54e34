use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

impl Webinar {
    /// Whether `taken` existing participations leave no seat for one more.
    pub fn is_full(&self, taken: usize) -> bool {
        taken >= self.seats as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participation {
    pub user_id: String,
    pub webinar_id: String,
}

impl Participation {
    pub fn new(user_id: impl Into<String>, webinar_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            webinar_id: webinar_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn webinar(seats: u32) -> Webinar {
        Webinar {
            id: "webinar-1".to_string(),
            organizer_id: "user-alice".to_string(),
            title: "Architecture 101".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 20, 11, 0, 0).unwrap(),
            seats,
        }
    }

    #[test]
    fn test_is_full() {
        let webinar = webinar(2);
        assert!(!webinar.is_full(0));
        assert!(!webinar.is_full(1));
        assert!(webinar.is_full(2));
        assert!(webinar.is_full(3));
    }

    #[test]
    fn test_user_debug_redacts_password() {
        let user = User::new("user-bob", "bob@example.com", "hunter2");
        let printed = format!("{:?}", user);
        assert!(printed.contains("user-bob"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_webinar_dates_deserialize_from_rfc3339() {
        let json = serde_json::json!({
            "id": "webinar-1",
            "organizer_id": "user-alice",
            "title": "Architecture 101",
            "start_date": "2024-01-20T10:00:00Z",
            "end_date": "2024-01-20T11:00:00Z",
            "seats": 2
        });
        let parsed: Webinar = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, webinar(2));
    }
}
