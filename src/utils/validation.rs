use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Shape check only: one '@' with a non-empty local part and a dotted domain.
pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    let invalid = |reason: &str| BookingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: email.to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("Email must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("Email must have exactly one '@' and a local part"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("Email domain must be a dotted host name"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("Email cannot contain whitespace"));
    }

    Ok(())
}

pub fn validate_date_order(
    field_name: &str,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> Result<()> {
    if end <= start {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} .. {}", start.to_rfc3339(), end.to_rfc3339()),
            reason: "End date must be after start date".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BookingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "alice@example.com").is_ok());
        assert!(validate_email("email", "").is_err());
        assert!(validate_email("email", "alice").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "alice@localhost").is_err());
        assert!(validate_email("email", "alice@@example.com").is_err());
        assert!(validate_email("email", "al ice@example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("seats", 2, 1).is_ok());
        assert!(validate_positive_number("seats", 0, 1).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let start = Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 20, 11, 0, 0).unwrap();
        assert!(validate_date_order("dates", &start, &end).is_ok());
        assert!(validate_date_order("dates", &end, &start).is_err());
        assert!(validate_date_order("dates", &start, &start).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("users", ["a", "b"]).is_ok());
        assert!(validate_unique_ids("users", ["a", "b", "a"]).is_err());
    }
}
