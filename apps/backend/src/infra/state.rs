use std::sync::Arc;
use std::time::Duration;

use crate::auth::verifier::CredentialVerifier;
use crate::config::db::DbKind;
use crate::config::process_env;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for `AppState`, used by the binary and by tests.
pub struct StateBuilder {
    security: SecurityConfig,
    db_kind: Option<DbKind>,
    verifier: Option<Arc<dyn CredentialVerifier>>,
    timeouts: Option<(Duration, Duration)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security: SecurityConfig::new(Vec::new()),
            db_kind: None,
            verifier: None,
            timeouts: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Replace the default JWT verifier.
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_timeouts(mut self, verify: Duration, query: Duration) -> Self {
        self.timeouts = Some((verify, query));
        self
    }

    /// Connect, migrate and assemble. Without `with_db` the state has no store.
    pub async fn build(self) -> Result<AppState, AppError> {
        let mut state = match self.db_kind {
            Some(kind) => {
                let conn = bootstrap_db(kind, &process_env).await?;
                AppState::new(conn, self.security)
            }
            None => AppState::new_without_db(self.security),
        };

        if let Some(verifier) = self.verifier {
            state = state.with_verifier(verifier);
        }
        if let Some((verify, query)) = self.timeouts {
            state = state.with_timeouts(verify, query);
        }
        Ok(state)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
