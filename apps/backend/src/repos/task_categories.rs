//! Task/category link repository functions.
//!
//! Callers check that both ends belong to the subject before linking.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use super::categories::Category;
use super::tasks::Task;
use crate::adapters::task_categories_sea as links_adapter;
use crate::adapters::task_categories_sea::LinkCreate;
use crate::adapters::{categories_sea, tasks_sea};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCategoryLink {
    pub id: i64,
    pub task_id: i64,
    pub category_id: i64,
    pub created_at: OffsetDateTime,
}

pub async fn find_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    link_id: i64,
) -> Result<Option<TaskCategoryLink>, DomainError> {
    let row = links_adapter::find_owned(conn, owner_id, link_id).await?;
    Ok(row.map(TaskCategoryLink::from))
}

pub async fn create_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    category_id: i64,
) -> Result<TaskCategoryLink, DomainError> {
    let row = links_adapter::create_link(
        conn,
        LinkCreate {
            task_id,
            category_id,
        },
    )
    .await?;
    Ok(TaskCategoryLink::from(row))
}

pub async fn relink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    link_id: i64,
    task_id: i64,
    category_id: i64,
) -> Result<Option<TaskCategoryLink>, DomainError> {
    let Some(current) = links_adapter::find_owned(conn, owner_id, link_id).await? else {
        return Ok(None);
    };
    let row = links_adapter::relink(
        conn,
        current,
        LinkCreate {
            task_id,
            category_id,
        },
    )
    .await?;
    Ok(Some(TaskCategoryLink::from(row)))
}

pub async fn delete_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    link_id: i64,
) -> Result<bool, DomainError> {
    if links_adapter::find_owned(conn, owner_id, link_id).await?.is_none() {
        return Ok(false);
    }
    Ok(links_adapter::delete_link(conn, link_id).await? > 0)
}

/// Categories of a task owned by `owner_id`; `None` if the task is not theirs.
pub async fn categories_of_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
) -> Result<Option<Vec<Category>>, DomainError> {
    let Some(task) = tasks_sea::find_owned(conn, owner_id, task_id).await? else {
        return Ok(None);
    };
    let rows = links_adapter::categories_of_task(conn, &task).await?;
    Ok(Some(rows.into_iter().map(Category::from).collect()))
}

/// Tasks in a category owned by `owner_id`; `None` if the category is not theirs.
pub async fn tasks_of_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
) -> Result<Option<Vec<Task>>, DomainError> {
    let Some(category) = categories_sea::find_owned(conn, owner_id, category_id).await? else {
        return Ok(None);
    };
    let rows = links_adapter::tasks_of_category(conn, &category).await?;
    rows.into_iter()
        .map(Task::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

pub async fn tasks_with_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<(Task, Vec<Category>)>, DomainError> {
    links_adapter::tasks_with_categories(conn, owner_id)
        .await?
        .into_iter()
        .map(|(task, categories)| {
            Ok((
                Task::try_from(task)?,
                categories.into_iter().map(Category::from).collect(),
            ))
        })
        .collect()
}

impl From<crate::entities::task_categories::Model> for TaskCategoryLink {
    fn from(model: crate::entities::task_categories::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            category_id: model.category_id,
            created_at: model.created_at,
        }
    }
}
