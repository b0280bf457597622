//! Repository functions for the domain layer (generic over `ConnectionTrait`).

pub mod categories;
pub mod task_categories;
pub mod tasks;
pub mod users;
