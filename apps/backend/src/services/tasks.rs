//! Task listing and CRUD, always scoped to the authenticated subject.

use serde::Deserialize;
use tracing::{debug, warn};

use super::validation;
use crate::adapters::tasks_sea::{TaskCreate, TaskPatch};
use crate::db::require_db;
use crate::domain::{compile, TaskFilterCriteria};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::tasks::{self, Task};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Partial update body. An explicit `"description": null` clears the
/// description; an absent key leaves it alone.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateInput {
    pub title: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusInput {
    pub status: Option<String>,
}

fn task_not_found() -> AppError {
    AppError::not_found(ErrorCode::TaskNotFound, "Task not found or not accessible.")
}

/// Compile `criteria` for `subject_id` and run it under the query timeout.
/// No match is an empty list, never an error.
pub async fn list_tasks(
    state: &AppState,
    subject_id: i64,
    criteria: &TaskFilterCriteria,
) -> Result<Vec<Task>, AppError> {
    let filter = compile(criteria, subject_id)?;
    debug!(?filter, "compiled task filter");

    let db = require_db(state)?;
    match tokio::time::timeout(state.query_timeout, tasks::find_tasks(db, &filter)).await {
        Ok(result) => Ok(result?),
        Err(_elapsed) => {
            warn!(
                timeout_ms = state.query_timeout.as_millis() as u64,
                "task listing query timed out"
            );
            Err(AppError::db_timeout())
        }
    }
}

pub async fn create_task(
    state: &AppState,
    subject_id: i64,
    input: NewTaskInput,
) -> Result<Task, AppError> {
    let title = validation::required_text(input.title.as_deref(), "Missing required fields")?;
    let due_date = validation::required_text(input.due_date.as_deref(), "Missing required fields")?;
    let due_date = validation::due_date(&due_date)?;
    // Empty strings fall back to the defaults like absent fields
    let status = match input.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => validation::status(raw)?,
        None => Default::default(),
    };
    let priority = match input.priority.as_deref().filter(|p| !p.is_empty()) {
        Some(raw) => validation::priority(raw)?,
        None => Default::default(),
    };

    let db = require_db(state)?;
    let task = tasks::create_task(
        db,
        TaskCreate {
            user_id: subject_id,
            title,
            description: input.description,
            due_date,
            status,
            priority,
        },
    )
    .await?;
    Ok(task)
}

pub async fn get_task(state: &AppState, subject_id: i64, task_id: i64) -> Result<Task, AppError> {
    let db = require_db(state)?;
    tasks::find_task(db, subject_id, task_id)
        .await?
        .ok_or_else(task_not_found)
}

/// Each present field is validated; absent fields keep their value.
pub async fn update_task(
    state: &AppState,
    subject_id: i64,
    task_id: i64,
    input: TaskUpdateInput,
) -> Result<Task, AppError> {
    let patch = TaskPatch {
        title: input
            .title
            .as_deref()
            .map(|t| validation::required_text(Some(t), "Title must not be empty"))
            .transpose()?,
        description: input.description,
        due_date: input
            .due_date
            .as_deref()
            .map(validation::due_date)
            .transpose()?,
        status: input.status.as_deref().map(validation::status).transpose()?,
        priority: input
            .priority
            .as_deref()
            .map(validation::priority)
            .transpose()?,
    };

    let db = require_db(state)?;
    tasks::update_task(db, subject_id, task_id, patch)
        .await?
        .ok_or_else(task_not_found)
}

pub async fn change_status(
    state: &AppState,
    subject_id: i64,
    task_id: i64,
    input: StatusInput,
) -> Result<Task, AppError> {
    let raw = input.status.filter(|s| !s.is_empty()).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::MissingField,
            "Status is required. Allowed values: PENDING, IN_PROGRESS, COMPLETED",
        )
    })?;
    let status = validation::status(&raw)?;

    let db = require_db(state)?;
    tasks::update_task(db, subject_id, task_id, TaskPatch::status(status))
        .await?
        .ok_or_else(task_not_found)
}

pub async fn delete_task(state: &AppState, subject_id: i64, task_id: i64) -> Result<(), AppError> {
    let db = require_db(state)?;
    if tasks::delete_task(db, subject_id, task_id).await? {
        Ok(())
    } else {
        Err(task_not_found())
    }
}
