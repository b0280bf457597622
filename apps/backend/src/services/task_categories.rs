//! Links between a subject's tasks and categories.

use serde::Deserialize;
use tracing::debug;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::categories::{self, Category};
use crate::repos::task_categories::{self as links, TaskCategoryLink};
use crate::repos::tasks::{self, Task};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInput {
    pub task_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl LinkInput {
    fn ids(&self) -> Result<(i64, i64), AppError> {
        match (self.task_id, self.category_id) {
            (Some(task_id), Some(category_id)) => Ok((task_id, category_id)),
            _ => Err(AppError::invalid(
                ErrorCode::MissingField,
                "Task ID and Category ID are required",
            )),
        }
    }
}

fn link_not_found() -> AppError {
    AppError::not_found(ErrorCode::TaskCategoryNotFound, "TaskCategory not found")
}

fn pair_not_found() -> AppError {
    AppError::not_found(ErrorCode::NotFound, "Task or Category not found for this user")
}

/// Both ends must belong to `subject_id`.
async fn ensure_owned_pair<C>(
    conn: &C,
    subject_id: i64,
    task_id: i64,
    category_id: i64,
) -> Result<(), AppError>
where
    C: sea_orm::ConnectionTrait + Send + Sync,
{
    let task = tasks::find_task(conn, subject_id, task_id).await?;
    let category = categories::find_category(conn, subject_id, category_id).await?;
    if task.is_none() || category.is_none() {
        debug!(task_id, category_id, "link endpoint not owned by subject");
        return Err(pair_not_found());
    }
    Ok(())
}

/// Every task of the subject with the names of its categories.
pub async fn overview(
    state: &AppState,
    subject_id: i64,
) -> Result<Vec<(Task, Vec<Category>)>, AppError> {
    let db = require_db(state)?;
    Ok(links::tasks_with_categories(db, subject_id).await?)
}

pub async fn link(
    state: &AppState,
    subject_id: i64,
    input: LinkInput,
) -> Result<TaskCategoryLink, AppError> {
    let (task_id, category_id) = input.ids()?;

    with_txn(state, move |txn| {
        Box::pin(async move {
            ensure_owned_pair(txn, subject_id, task_id, category_id).await?;
            Ok(links::create_link(txn, task_id, category_id).await?)
        })
    })
    .await
}

pub async fn relink(
    state: &AppState,
    subject_id: i64,
    link_id: i64,
    input: LinkInput,
) -> Result<TaskCategoryLink, AppError> {
    let (task_id, category_id) = input.ids()?;

    with_txn(state, move |txn| {
        Box::pin(async move {
            if links::find_link(txn, subject_id, link_id).await?.is_none() {
                return Err(link_not_found());
            }
            ensure_owned_pair(txn, subject_id, task_id, category_id).await?;
            links::relink(txn, subject_id, link_id, task_id, category_id)
                .await?
                .ok_or_else(link_not_found)
        })
    })
    .await
}

pub async fn unlink(state: &AppState, subject_id: i64, link_id: i64) -> Result<(), AppError> {
    let db = require_db(state)?;
    if links::delete_link(db, subject_id, link_id).await? {
        Ok(())
    } else {
        Err(link_not_found())
    }
}

pub async fn categories_of_task(
    state: &AppState,
    subject_id: i64,
    task_id: i64,
) -> Result<(Task, Vec<Category>), AppError> {
    let db = require_db(state)?;
    let task = tasks::find_task(db, subject_id, task_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::TaskNotFound, "Task not found or not accessible."))?;
    let categories = links::categories_of_task(db, subject_id, task_id)
        .await?
        .unwrap_or_default();
    Ok((task, categories))
}

pub async fn tasks_of_category(
    state: &AppState,
    subject_id: i64,
    category_id: i64,
) -> Result<Vec<Task>, AppError> {
    let db = require_db(state)?;
    links::tasks_of_category(db, subject_id, category_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::CategoryNotFound,
                "Category not found or does not belong to this user.",
            )
        })
}
