//! Task repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::tasks_sea as tasks_adapter;
use crate::adapters::tasks_sea::{TaskCreate, TaskPatch};
use crate::domain::{CompositeTaskFilter, TaskPriority, TaskStatus};
use crate::entities::tasks;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Task domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: OffsetDateTime,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Run a compiled listing filter. No match is an empty vec, not an error.
pub async fn find_tasks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &CompositeTaskFilter,
) -> Result<Vec<Task>, DomainError> {
    tasks_adapter::find_by_filter(conn, filter)
        .await?
        .into_iter()
        .map(Task::try_from)
        .collect()
}

pub async fn find_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
) -> Result<Option<Task>, DomainError> {
    tasks_adapter::find_owned(conn, owner_id, task_id)
        .await?
        .map(Task::try_from)
        .transpose()
}

pub async fn create_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TaskCreate,
) -> Result<Task, DomainError> {
    Task::try_from(tasks_adapter::create_task(conn, dto).await?)
}

/// Patch a task of `owner_id`. `None` when it does not exist for that owner.
pub async fn update_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
    patch: TaskPatch,
) -> Result<Option<Task>, DomainError> {
    let Some(current) = tasks_adapter::find_owned(conn, owner_id, task_id).await? else {
        return Ok(None);
    };
    let updated = tasks_adapter::update_task(conn, current, patch).await?;
    Task::try_from(updated).map(Some)
}

/// `true` if a row was removed.
pub async fn delete_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
) -> Result<bool, DomainError> {
    Ok(tasks_adapter::delete_owned(conn, owner_id, task_id).await? > 0)
}

impl TryFrom<tasks::Model> for Task {
    type Error = DomainError;

    fn try_from(model: tasks::Model) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| {
            DomainError::infra(
                InfraErrorKind::Other("DataCorruption".into()),
                format!("task {} has an unknown {what}", model.id),
            )
        };
        let status = TaskStatus::parse(&model.status).ok_or_else(|| corrupt("status"))?;
        let priority = TaskPriority::parse(&model.priority).ok_or_else(|| corrupt("priority"))?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            due_date: model.due_date,
            status,
            priority,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
