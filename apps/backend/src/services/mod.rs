//! Request-level operations. Each takes the shared state plus the
//! authenticated subject where one applies, validates its input and talks to
//! the repos.

pub mod auth;
pub mod categories;
pub mod task_categories;
pub mod tasks;
pub mod users;
pub mod validation;
