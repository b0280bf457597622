//! Field-level checks shared by the request handlers.

use lazy_regex::regex_is_match;
use time::OffsetDateTime;

use crate::domain::dates::parse_instant;
use crate::domain::{TaskPriority, TaskStatus};
use crate::error::AppError;
use crate::errors::ErrorCode;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed value of a required text field; missing or blank fails with
/// `MISSING_FIELD` and `message`.
pub fn required_text(value: Option<&str>, message: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::invalid(ErrorCode::MissingField, message)),
    }
}

pub fn email(value: &str) -> Result<(), AppError> {
    if regex_is_match!(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$", value) {
        Ok(())
    } else {
        Err(AppError::invalid(ErrorCode::InvalidEmail, "Invalid email address"))
    }
}

/// At least eight characters with a lowercase letter, an uppercase letter,
/// a digit and a symbol.
pub fn strong_password(value: &str) -> Result<(), AppError> {
    let long_enough = value.chars().count() >= MIN_PASSWORD_LEN;
    let lower = value.chars().any(|c| c.is_lowercase());
    let upper = value.chars().any(|c| c.is_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    let symbol = value.chars().any(|c| !c.is_alphanumeric());

    if long_enough && lower && upper && digit && symbol {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::WeakPassword,
            "Password not strong. Password must be minimum 8 characters and include lowercase, uppercase, numbers, symbols",
        ))
    }
}

pub fn status(value: &str) -> Result<TaskStatus, AppError> {
    TaskStatus::parse(value).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidStatus,
            "Invalid status value. Allowed values: PENDING, IN_PROGRESS, COMPLETED",
        )
    })
}

pub fn priority(value: &str) -> Result<TaskPriority, AppError> {
    TaskPriority::parse(value).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidPriority,
            "Invalid priority value. Allowed values: LOW, MEDIUM, HIGH",
        )
    })
}

pub fn due_date(value: &str) -> Result<OffsetDateTime, AppError> {
    parse_instant(value).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidDate,
            "Invalid dueDate value. Please provide a valid date.",
        )
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text(Some("  work "), "m").unwrap(), "work");
        for value in [None, Some(""), Some("   ")] {
            let err = required_text(value, "Name is required").unwrap_err();
            assert_eq!(err.code(), ErrorCode::MissingField);
            assert_eq!(err.message(), "Name is required");
        }
    }

    #[test]
    fn email_shapes() {
        assert!(email("ada@example.com").is_ok());
        assert!(email("first.last+tag@mail.example.org").is_ok());
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "a b@example.com"] {
            assert_eq!(email(bad).unwrap_err().code(), ErrorCode::InvalidEmail, "{bad}");
        }
    }

    #[test]
    fn password_strength() {
        assert!(strong_password("Secr3t!pass").is_ok());
        for weak in ["Sh0rt!", "alllower1!", "ALLUPPER1!", "NoDigits!!", "NoSymbol12"] {
            assert_eq!(
                strong_password(weak).unwrap_err().code(),
                ErrorCode::WeakPassword,
                "{weak}"
            );
        }
    }

    #[test]
    fn enums_parse_case_sensitively() {
        assert_eq!(status("IN_PROGRESS").unwrap(), TaskStatus::InProgress);
        assert_eq!(status("pending").unwrap_err().code(), ErrorCode::InvalidStatus);
        assert_eq!(priority("HIGH").unwrap(), TaskPriority::High);
        assert_eq!(priority("URGENT").unwrap_err().code(), ErrorCode::InvalidPriority);
    }

    #[test]
    fn due_date_accepts_calendar_dates() {
        assert_eq!(due_date("2024-06-01").unwrap(), datetime!(2024-06-01 00:00 UTC));
        assert_eq!(due_date("June 1st").unwrap_err().code(), ErrorCode::InvalidDate);
    }
}
