//! Stable error codes surfaced in the `error` field of the response envelope.
//!
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string clients see.
//! Add new codes here; never pass ad-hoc strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No bearer credential, or the header is not `Bearer <token>`
    UnauthorizedMissingBearer,
    /// The credential could not be decoded
    UnauthorizedMalformedToken,
    /// Request reached a protected handler without an attached identity
    Unauthenticated,
    /// Username/password pair rejected at login
    InvalidCredentials,
    /// Signature does not match the configured secret
    ForbiddenInvalidSignature,
    /// Credential is past its expiry
    ForbiddenExpiredToken,

    // Request validation
    /// A listing filter input failed to parse
    InvalidFilterValue,
    /// Path identifier is not a positive integer
    InvalidId,
    /// Required body field missing or blank
    MissingField,
    InvalidEmail,
    WeakPassword,
    InvalidStatus,
    InvalidPriority,
    InvalidDate,
    /// Body could not be parsed as JSON
    BadRequest,
    ValidationError,

    // Not found
    UserNotFound,
    TaskNotFound,
    CategoryNotFound,
    TaskCategoryNotFound,
    NotFound,

    // Conflicts
    UsernameTaken,
    EmailTaken,
    CategoryExists,
    TaskCategoryExists,
    Conflict,

    // Timeouts
    VerifyTimeout,
    DbTimeout,

    // System
    DbError,
    DbUnavailable,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedMalformedToken => "UNAUTHORIZED_MALFORMED_TOKEN",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ForbiddenInvalidSignature => "FORBIDDEN_INVALID_SIGNATURE",
            Self::ForbiddenExpiredToken => "FORBIDDEN_EXPIRED_TOKEN",

            Self::InvalidFilterValue => "INVALID_FILTER_VALUE",
            Self::InvalidId => "INVALID_ID",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidPriority => "INVALID_PRIORITY",
            Self::InvalidDate => "INVALID_DATE",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::TaskCategoryNotFound => "TASK_CATEGORY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::CategoryExists => "CATEGORY_EXISTS",
            Self::TaskCategoryExists => "TASK_CATEGORY_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::VerifyTimeout => "VERIFY_TIMEOUT",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    #[cfg(test)]
    pub(crate) const ALL: &'static [ErrorCode] = &[
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedMalformedToken,
        Self::Unauthenticated,
        Self::InvalidCredentials,
        Self::ForbiddenInvalidSignature,
        Self::ForbiddenExpiredToken,
        Self::InvalidFilterValue,
        Self::InvalidId,
        Self::MissingField,
        Self::InvalidEmail,
        Self::WeakPassword,
        Self::InvalidStatus,
        Self::InvalidPriority,
        Self::InvalidDate,
        Self::BadRequest,
        Self::ValidationError,
        Self::UserNotFound,
        Self::TaskNotFound,
        Self::CategoryNotFound,
        Self::TaskCategoryNotFound,
        Self::NotFound,
        Self::UsernameTaken,
        Self::EmailTaken,
        Self::CategoryExists,
        Self::TaskCategoryExists,
        Self::Conflict,
        Self::VerifyTimeout,
        Self::DbTimeout,
        Self::DbError,
        Self::DbUnavailable,
        Self::ConfigError,
        Self::Internal,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {code}");
        }
    }

    #[test]
    fn codes_are_screaming_snake_case() {
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
            assert!(!s.starts_with('_') && !s.ends_with('_'));
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            ErrorCode::InvalidFilterValue.to_string(),
            "INVALID_FILTER_VALUE"
        );
    }
}
