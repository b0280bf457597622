use std::str::FromStr;

use super::lookup;
use crate::error::AppError;

/// Which store the backend talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbKind {
    #[default]
    Postgres,
    /// Private in-memory SQLite database; gone when the process exits
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-memory" | "sqlite" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "DB_KIND must be 'postgres' or 'sqlite-memory', got '{other}'"
            ))),
        }
    }
}

/// Connection URL for `kind`, built from `POSTGRES_*` variables.
pub fn db_url<F>(kind: DbKind, vars: &F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            let host = lookup(vars, "POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup(vars, "POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db = must_var(vars, "POSTGRES_DB")?;
            let user = must_var(vars, "POSTGRES_USER")?;
            let password = must_var(vars, "POSTGRES_PASSWORD")?;
            Ok(format!("postgresql://{user}:{password}@{host}:{port}/{db}"))
        }
    }
}

pub(crate) fn must_var<F>(vars: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(vars, name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
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
    fn postgres_url_uses_defaults_for_host_and_port() {
        let env = vars(&[
            ("POSTGRES_DB", "taskdeck"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "pw"),
        ]);
        assert_eq!(
            db_url(DbKind::Postgres, &env).unwrap(),
            "postgresql://app:pw@localhost:5432/taskdeck"
        );
    }

    #[test]
    fn postgres_url_honours_host_and_port() {
        let env = vars(&[
            ("POSTGRES_HOST", "db.internal"),
            ("POSTGRES_PORT", "5433"),
            ("POSTGRES_DB", "taskdeck"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "pw"),
        ]);
        assert_eq!(
            db_url(DbKind::Postgres, &env).unwrap(),
            "postgresql://app:pw@db.internal:5433/taskdeck"
        );
    }

    #[test]
    fn missing_credentials_name_the_variable() {
        let env = vars(&[("POSTGRES_DB", "taskdeck"), ("POSTGRES_USER", "app")]);
        let err = db_url(DbKind::Postgres, &env).unwrap_err();
        assert!(err.to_string().contains("POSTGRES_PASSWORD"));
    }

    #[test]
    fn sqlite_memory_needs_nothing() {
        assert_eq!(
            db_url(DbKind::SqliteMemory, &vars(&[])).unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("Postgres".parse::<DbKind>().unwrap(), DbKind::Postgres);
        assert_eq!("sqlite-memory".parse::<DbKind>().unwrap(), DbKind::SqliteMemory);
        assert!("mysql".parse::<DbKind>().is_err());
    }
}
