//! Registration and login.

use std::fmt;
use std::time::SystemTime;

use actix_web::web;
use argon2::Params;
use serde::Deserialize;
use tracing::{debug, info};

use super::validation;
use crate::adapters::users_sea::UserCreate;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::state::app_state::AppState;

const REGISTER_FIELDS_REQUIRED: &str = "Username, email, and password are required.";
const LOGIN_FIELDS_REQUIRED: &str = "Username and password are required.";

#[derive(Debug, Default, Deserialize)]
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub username: String,
    pub token: String,
}

/// Validated account fields; the password is still plaintext here.
pub(crate) struct AccountFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AccountFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountFields")
            .field("username", &self.username)
            .field("email", &format_args!("{}", Redacted(&self.email)))
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Presence first (all three), then email format, then password strength.
pub(crate) fn validate_account(
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<AccountFields, AppError> {
    let username = validation::required_text(username, REGISTER_FIELDS_REQUIRED)?;
    let email = validation::required_text(email, REGISTER_FIELDS_REQUIRED)?;
    let password = match password {
        Some(p) if !p.trim().is_empty() => p.to_string(),
        _ => return Err(AppError::invalid(ErrorCode::MissingField, REGISTER_FIELDS_REQUIRED)),
    };

    validation::email(&email)?;
    validation::strong_password(&password)?;

    Ok(AccountFields {
        username,
        email,
        password,
    })
}

/// Argon2 on the blocking pool.
pub(crate) async fn hash_off_thread(password: String, params: Params) -> Result<String, AppError> {
    web::block(move || hash_password(&password, &params))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {e}")))?
}

/// 409 naming whichever of username/email is held by `existing`.
pub(crate) fn taken(existing: &User, username: &str) -> AppError {
    if existing.username == username {
        AppError::conflict(ErrorCode::UsernameTaken, "Username already used.")
    } else {
        AppError::conflict(ErrorCode::EmailTaken, "Email already used.")
    }
}

pub async fn register(state: &AppState, input: RegisterInput) -> Result<User, AppError> {
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
            if let Some(existing) =
                users::find_conflicting_user(txn, &username, &email, None).await?
            {
                return Err(taken(&existing, &username));
            }
            Ok(users::create_user(txn, UserCreate::new(username, email, password_hash)).await?)
        })
    })
    .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    Ok(user)
}

/// Unknown username and wrong password fail identically.
pub async fn login(state: &AppState, input: LoginInput) -> Result<LoginOutcome, AppError> {
    let username = validation::required_text(input.username.as_deref(), LOGIN_FIELDS_REQUIRED)?;
    let password = match input.password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::invalid(ErrorCode::MissingField, LOGIN_FIELDS_REQUIRED)),
    };

    let db = require_db(state)?;
    let Some(user) = users::find_user_by_username(db, &username).await? else {
        debug!("login for unknown username");
        return Err(AppError::invalid_credentials());
    };

    let phc = user.password_hash.clone();
    let verified = web::block(move || verify_password(&password, &phc))
        .await
        .map_err(|e| AppError::internal(format!("password check failed: {e}")))?;
    if !verified {
        debug!(user_id = user.id, "login with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(user.id, SystemTime::now(), &state.security)?;
    info!(user_id = user.id, "login succeeded");

    Ok(LoginOutcome {
        username: user.username,
        token,
    })
}
