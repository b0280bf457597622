//! Helpers shared by unit and integration tests.

pub mod app_builder;

pub use app_builder::create_test_app;

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::state::{build_state, StateBuilder};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

pub const TEST_JWT_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Security config with the test secret and minimum Argon2 costs.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.to_vec()).with_cheap_hashing()
}

/// State builder over a fresh, migrated in-memory SQLite store.
pub fn create_test_state() -> StateBuilder {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .with_security(test_security())
}

/// Shorthand for `create_test_state().build()`.
pub async fn sqlite_state() -> Result<AppState, AppError> {
    create_test_state().build().await
}
