use std::time::Duration;

use super::db::{must_var, DbKind};
use super::lookup;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;
use crate::state::app_state::AppState;

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub verify_timeout: Duration,
    pub query_timeout: Duration,
    pub db_kind: DbKind,
}

impl AppConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(&super::process_env)
    }

    /// Read through an arbitrary variable lookup.
    pub fn from_vars<F>(vars: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(vars, "BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(vars, "BACKEND_PORT", 3001u16)?;
        let jwt_secret = must_var(vars, "BACKEND_JWT_SECRET")?;
        let token_ttl = Duration::from_secs(parse_or(
            vars,
            "TOKEN_TTL_SECS",
            SecurityConfig::DEFAULT_TOKEN_TTL.as_secs(),
        )?);
        let verify_timeout = Duration::from_millis(parse_or(
            vars,
            "VERIFY_TIMEOUT_MS",
            AppState::DEFAULT_VERIFY_TIMEOUT.as_millis() as u64,
        )?);
        let query_timeout = Duration::from_millis(parse_or(
            vars,
            "QUERY_TIMEOUT_MS",
            AppState::DEFAULT_QUERY_TIMEOUT.as_millis() as u64,
        )?);
        let db_kind = match lookup(vars, "DB_KIND") {
            Some(raw) => raw.parse()?,
            None => DbKind::default(),
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            token_ttl,
            verify_timeout,
            query_timeout,
            db_kind,
        })
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes()).with_token_ttl(self.token_ttl)
    }
}

fn parse_or<F, T>(vars: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(vars, name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_the_secret_is_set() {
        let cfg = AppConfig::from_vars(&vars(&[("BACKEND_JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.token_ttl, Duration::from_secs(3600));
        assert_eq!(cfg.verify_timeout, Duration::from_millis(2000));
        assert_eq!(cfg.query_timeout, Duration::from_millis(5000));
        assert_eq!(cfg.db_kind, DbKind::Postgres);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = AppConfig::from_vars(&vars(&[
            ("BACKEND_JWT_SECRET", "s3cret"),
            ("BACKEND_PORT", "8080"),
            ("TOKEN_TTL_SECS", "60"),
            ("VERIFY_TIMEOUT_MS", "250"),
            ("DB_KIND", "sqlite-memory"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.security().token_ttl, Duration::from_secs(60));
        assert_eq!(cfg.verify_timeout, Duration::from_millis(250));
        assert_eq!(cfg.db_kind, DbKind::SqliteMemory);
    }

    #[test]
    fn secret_is_required() {
        let err = AppConfig::from_vars(&vars(&[])).unwrap_err();
        assert!(err.to_string().contains("BACKEND_JWT_SECRET"));
    }

    #[test]
    fn bad_numbers_are_config_errors() {
        let err = AppConfig::from_vars(&vars(&[
            ("BACKEND_JWT_SECRET", "s3cret"),
            ("BACKEND_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
