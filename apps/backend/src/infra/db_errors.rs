//! SeaORM -> DomainError translation.
//!
//! Repos convert `sea_orm::DbErr` into `DomainError` here; handlers then map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Match a unique violation to the constraint it tripped.
///
/// SQLite reports `UNIQUE constraint failed: table.col[, table.col]`;
/// Postgres reports the constraint or index name.
fn unique_conflict(msg: &str) -> (ConflictKind, &'static str) {
    if msg.contains("task_categories.task_id") || msg.contains("ux_task_categories_pair") {
        (
            ConflictKind::DuplicateTaskCategory,
            "Task is already linked to this category",
        )
    } else if msg.contains("categories.name") || msg.contains("ux_categories_user_name") {
        (
            ConflictKind::UniqueCategoryName,
            "Category with this name already exists",
        )
    } else if msg.contains("users.username") || msg.contains("users_username_key") {
        (ConflictKind::UniqueUsername, "Username already taken")
    } else if msg.contains("users.email") || msg.contains("users_email_key") {
        (ConflictKind::UniqueEmail, "Email already registered")
    } else {
        (
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        )
    }
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(NotFoundKind::Other(what.clone()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unique constraint violation");
        let (kind, detail) = unique_conflict(&msg);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&msg, "23503") || msg.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Foreign key violation");
        return DomainError::validation("Referenced record does not exist");
    }

    if msg.contains("timeout") || msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
