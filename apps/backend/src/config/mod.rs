//! Environment-driven configuration, read once at startup.

pub mod app;
pub mod db;

pub use app::AppConfig;
pub use db::{db_url, DbKind};

/// Look up a variable, treating empty values as unset.
pub(crate) fn lookup<F>(vars: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    vars(name).filter(|v| !v.trim().is_empty())
}

/// Process environment as a lookup function.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
