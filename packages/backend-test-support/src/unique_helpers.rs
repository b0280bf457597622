//! Unique fixture values so tests sharing a process never collide on the
//! username/email unique keys.

use uuid::Uuid;

fn suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_owned()
}

/// `{prefix}_{random}`, usable as a username.
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}_{}", suffix())
}

/// `{prefix}.{random}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}.{}@example.test", suffix())
}
