//! Account listing and self-service profile management.

use serde::Deserialize;
use tracing::info;

use super::auth::{hash_off_thread, taken, validate_account, AccountFields};
use crate::adapters::users_sea::UserUpdate;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::users::{self, User};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn user_not_found() -> AppError {
    AppError::not_found(ErrorCode::UserNotFound, "User not found")
}

pub async fn list_users(state: &AppState) -> Result<Vec<User>, AppError> {
    let db = require_db(state)?;
    Ok(users::list_users(db).await?)
}

/// The subject's own record. A token may outlive its account.
pub async fn profile(state: &AppState, subject_id: i64) -> Result<User, AppError> {
    let db = require_db(state)?;
    users::find_user_by_id(db, subject_id)
        .await?
        .ok_or_else(user_not_found)
}

/// Replace username, email and password together.
pub async fn update_profile(
    state: &AppState,
    subject_id: i64,
    input: ProfileInput,
) -> Result<User, AppError> {
    let AccountFields {
        username,
        email,
        password,
    } = validate_account(
        input.username.as_deref(),
        input.email.as_deref(),
        input.password.as_deref(),
    )?;
    let password_hash = hash_off_thread(password, state.security.password_params.clone()).await?;

    let user = with_txn(state, move |txn| {
        Box::pin(async move {
            if users::find_user_by_id(txn, subject_id).await?.is_none() {
                return Err(user_not_found());
            }
            if let Some(existing) =
                users::find_conflicting_user(txn, &username, &email, Some(subject_id)).await?
            {
                return Err(taken(&existing, &username));
            }
            Ok(users::update_user(
                txn,
                UserUpdate {
                    id: subject_id,
                    username,
                    email,
                    password_hash,
                },
            )
            .await?)
        })
    })
    .await?;

    info!(user_id = user.id, "profile updated");
    Ok(user)
}

/// Delete the subject's account; tasks, categories and links cascade.
/// Returns the removed user.
pub async fn delete_account(state: &AppState, subject_id: i64) -> Result<User, AppError> {
    let user = with_txn(state, move |txn| {
        Box::pin(async move {
            let user = users::find_user_by_id(txn, subject_id)
                .await?
                .ok_or_else(user_not_found)?;
            users::delete_user(txn, subject_id).await?;
            Ok(user)
        })
    })
    .await?;

    info!(user_id = user.id, "account deleted");
    Ok(user)
}
