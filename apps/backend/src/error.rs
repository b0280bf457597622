use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::domain::task_filter::FilterError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;
use crate::trace_ctx;

/// Error body. Same envelope as successful responses, with `data` null and
/// the stable code in `error`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    pub data: Option<()>,
    pub error: &'static str,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Invalid filter value for {field}: {detail}")]
    InvalidFilterValue { field: &'static str, detail: String },
    #[error("Unauthenticated: {detail}")]
    Unauthenticated { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Timeout: {detail}")]
    Timeout { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::Unauthenticated { code, .. }
            | AppError::Forbidden { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Timeout { code, .. } => *code,
            AppError::InvalidFilterValue { .. } => ErrorCode::InvalidFilterValue,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Client-facing message. Infra failures never leak their detail.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::InvalidFilterValue { detail, .. }
            | AppError::Unauthenticated { detail, .. }
            | AppError::Forbidden { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Timeout { detail, .. } => detail.clone(),
            AppError::Db { .. } => "Database operation failed".to_string(),
            AppError::DbUnavailable => "Database unavailable".to_string(),
            AppError::Config { .. } | AppError::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidFilterValue { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::DbUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid_filter(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidFilterValue {
            field,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn missing_bearer() -> Self {
        Self::Unauthenticated {
            code: ErrorCode::UnauthorizedMissingBearer,
            detail: "No token provided".to_string(),
        }
    }

    pub fn malformed_token() -> Self {
        Self::Unauthenticated {
            code: ErrorCode::UnauthorizedMalformedToken,
            detail: "Token could not be decoded".to_string(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            code: ErrorCode::Unauthenticated,
            detail: "Authentication required".to_string(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthenticated {
            code: ErrorCode::InvalidCredentials,
            detail: "Invalid username or password".to_string(),
        }
    }

    pub fn invalid_signature() -> Self {
        Self::Forbidden {
            code: ErrorCode::ForbiddenInvalidSignature,
            detail: "Invalid token signature".to_string(),
        }
    }

    pub fn expired_token() -> Self {
        Self::Forbidden {
            code: ErrorCode::ForbiddenExpiredToken,
            detail: "Token expired".to_string(),
        }
    }

    pub fn verify_timeout() -> Self {
        Self::Timeout {
            code: ErrorCode::VerifyTimeout,
            detail: "Credential verification timed out".to_string(),
        }
    }

    pub fn db_timeout() -> Self {
        Self::Timeout {
            code: ErrorCode::DbTimeout,
            detail: "Database query timed out".to_string(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::invalid(ErrorCode::ValidationError, detail),
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::UniqueUsername => ErrorCode::UsernameTaken,
                    ConflictKind::UniqueEmail => ErrorCode::EmailTaken,
                    ConflictKind::UniqueCategoryName => ErrorCode::CategoryExists,
                    ConflictKind::DuplicateTaskCategory => ErrorCode::TaskCategoryExists,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::User => ErrorCode::UserNotFound,
                    NotFoundKind::Task => ErrorCode::TaskNotFound,
                    NotFoundKind::Category => ErrorCode::CategoryNotFound,
                    NotFoundKind::TaskCategory => ErrorCode::TaskCategoryNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(InfraErrorKind::Timeout, _) => AppError::db_timeout(),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::db_unavailable(),
            DomainError::Infra(InfraErrorKind::Other(_), detail) => AppError::db(detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e).into()
    }
}

impl From<FilterError> for AppError {
    fn from(e: FilterError) -> Self {
        let message = e.to_string();
        match e {
            FilterError::InvalidValue { field } => AppError::invalid_filter(field.as_str(), message),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(trace_id = %trace_id, error = %self, "request failed");
        }

        let body = ErrorEnvelope {
            status_code: status.as_u16(),
            message: self.message(),
            data: None,
            error: self.code().as_str(),
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(body)
    }
}
