use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::verifier::{CredentialVerifier, JwtVerifier};

/// Shared, read-only application state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    /// Absent only in tests that never reach the store
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Upper bound for the auth gate's verification call
    pub verify_timeout: Duration,
    /// Upper bound for task listing queries
    pub query_timeout: Duration,
}

impl AppState {
    pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_millis(2000);
    pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(5000);

    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        let mut state = Self::new_without_db(security);
        state.db = Some(db);
        state
    }

    /// State whose verifier is a [`JwtVerifier`] over `security`.
    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            verifier: Arc::new(JwtVerifier::new(security.clone())),
            security,
            verify_timeout: Self::DEFAULT_VERIFY_TIMEOUT,
            query_timeout: Self::DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn with_timeouts(mut self, verify: Duration, query: Duration) -> Self {
        self.verify_timeout = verify;
        self.query_timeout = query;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("verify_timeout", &self.verify_timeout)
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}
