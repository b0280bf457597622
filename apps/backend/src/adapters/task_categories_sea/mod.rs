//! SeaORM adapter for task/category links.
//!
//! Ownership of a link is derived from its task: a link belongs to whoever
//! owns the task it points at.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, JoinType,
    ModelTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::domain::dates;
use crate::entities::{categories, task_categories, tasks};

pub mod dto;

pub use dto::LinkCreate;

pub async fn find_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    link_id: i64,
) -> Result<Option<task_categories::Model>, sea_orm::DbErr> {
    task_categories::Entity::find_by_id(link_id)
        .join(JoinType::InnerJoin, task_categories::Relation::Task.def())
        .filter(tasks::Column::UserId.eq(owner_id))
        .one(conn)
        .await
}

pub async fn create_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LinkCreate,
) -> Result<task_categories::Model, sea_orm::DbErr> {
    task_categories::ActiveModel {
        id: NotSet,
        task_id: Set(dto.task_id),
        category_id: Set(dto.category_id),
        created_at: Set(dates::now()),
    }
    .insert(conn)
    .await
}

pub async fn relink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: task_categories::Model,
    dto: LinkCreate,
) -> Result<task_categories::Model, sea_orm::DbErr> {
    let mut active = current.into_active_model();
    active.task_id = Set(dto.task_id);
    active.category_id = Set(dto.category_id);
    active.update(conn).await
}

pub async fn delete_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    link_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = task_categories::Entity::delete_by_id(link_id)
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn categories_of_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task: &tasks::Model,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    task.find_related(categories::Entity)
        .order_by_asc(categories::Column::Name)
        .all(conn)
        .await
}

pub async fn tasks_of_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: &categories::Model,
) -> Result<Vec<tasks::Model>, sea_orm::DbErr> {
    category
        .find_related(tasks::Entity)
        .order_by_asc(tasks::Column::DueDate)
        .order_by_asc(tasks::Column::Id)
        .all(conn)
        .await
}

/// Every task of `owner_id` paired with its categories.
pub async fn tasks_with_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<(tasks::Model, Vec<categories::Model>)>, sea_orm::DbErr> {
    tasks::Entity::find()
        .filter(tasks::Column::UserId.eq(owner_id))
        .order_by_asc(tasks::Column::Id)
        .find_with_related(categories::Entity)
        .all(conn)
        .await
}
