//! DTOs for tasks_sea adapter.

use time::OffsetDateTime;

use crate::domain::{TaskPriority, TaskStatus};

#[derive(Debug, Clone)]
pub struct TaskCreate {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: OffsetDateTime,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

/// Partial update. `None` leaves a column untouched; `description` uses a
/// nested option so it can be cleared.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<OffsetDateTime>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
