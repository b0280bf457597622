//! SeaORM adapter for tasks, including translation of the compiled listing
//! filter into a query condition.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};

use crate::domain::dates;
use crate::domain::{CompositeTaskFilter, DueDateConstraint};
use crate::entities::tasks;

pub mod dto;

pub use dto::{TaskCreate, TaskPatch};

/// Condition equivalent to `filter`. Bounds are ANDed, so an empty interval
/// matches nothing.
pub fn filter_condition(filter: &CompositeTaskFilter) -> Condition {
    let mut cond = Condition::all().add(tasks::Column::UserId.eq(filter.owner_id));

    if let Some(status) = filter.status {
        cond = cond.add(tasks::Column::Status.eq(status.as_str()));
    }
    if let Some(priority) = filter.priority {
        cond = cond.add(tasks::Column::Priority.eq(priority.as_str()));
    }

    match filter.due_date {
        None => {}
        Some(DueDateConstraint::Exact(v)) => {
            cond = cond.add(tasks::Column::DueDate.eq(v));
        }
        Some(DueDateConstraint::Bounds(b)) => {
            if let Some(v) = b.gte {
                cond = cond.add(tasks::Column::DueDate.gte(v));
            }
            if let Some(v) = b.lte {
                cond = cond.add(tasks::Column::DueDate.lte(v));
            }
            if let Some(v) = b.lt {
                cond = cond.add(tasks::Column::DueDate.lt(v));
            }
            if let Some(v) = b.gt {
                cond = cond.add(tasks::Column::DueDate.gt(v));
            }
        }
    }
    cond
}

/// Tasks matching `filter`, ordered by due date then id.
pub async fn find_by_filter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &CompositeTaskFilter,
) -> Result<Vec<tasks::Model>, sea_orm::DbErr> {
    tasks::Entity::find()
        .filter(filter_condition(filter))
        .order_by_asc(tasks::Column::DueDate)
        .order_by_asc(tasks::Column::Id)
        .all(conn)
        .await
}

/// `task_id` if it belongs to `owner_id`.
pub async fn find_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
) -> Result<Option<tasks::Model>, sea_orm::DbErr> {
    tasks::Entity::find_by_id(task_id)
        .filter(tasks::Column::UserId.eq(owner_id))
        .one(conn)
        .await
}

pub async fn create_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TaskCreate,
) -> Result<tasks::Model, sea_orm::DbErr> {
    let now = dates::now();
    tasks::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        title: Set(dto.title),
        description: Set(dto.description),
        due_date: Set(dto.due_date),
        status: Set(dto.status.as_str().to_string()),
        priority: Set(dto.priority.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

/// Apply `patch` to an already loaded task.
pub async fn update_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: tasks::Model,
    patch: TaskPatch,
) -> Result<tasks::Model, sea_orm::DbErr> {
    let mut active = current.into_active_model();
    if let Some(title) = patch.title {
        active.title = Set(title);
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
    }
    if let Some(due_date) = patch.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(status) = patch.status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(priority) = patch.priority {
        active.priority = Set(priority.as_str().to_string());
    }
    active.updated_at = Set(dates::now());
    active.update(conn).await
}

pub async fn delete_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    task_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = tasks::Entity::delete_many()
        .filter(tasks::Column::Id.eq(task_id))
        .filter(tasks::Column::UserId.eq(owner_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{Query, SqliteQueryBuilder};
    use time::macros::datetime;

    use super::*;
    use crate::domain::{DueDateBounds, TaskStatus};

    fn sql(filter: &CompositeTaskFilter) -> String {
        Query::select()
            .column(tasks::Column::Id)
            .from(tasks::Entity)
            .cond_where(filter_condition(filter))
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn owner_is_always_constrained() {
        let s = sql(&CompositeTaskFilter::for_owner(7));
        assert!(s.contains(r#""user_id" = 7"#), "{s}");
    }

    #[test]
    fn bounds_are_anded_on_one_column() {
        let mut filter = CompositeTaskFilter::for_owner(1);
        filter.status = Some(TaskStatus::Completed);
        filter.due_date = Some(DueDateConstraint::Bounds(DueDateBounds {
            gte: Some(datetime!(2024-06-01 00:00:00 UTC)),
            lte: None,
            lt: Some(datetime!(2024-06-15 00:00:00 UTC)),
            gt: None,
        }));
        let s = sql(&filter);
        assert!(s.contains(r#""status" = 'COMPLETED'"#), "{s}");
        assert!(s.contains(r#""due_date" >= "#), "{s}");
        assert!(s.contains(r#""due_date" < "#), "{s}");
        assert!(!s.contains(" OR "), "{s}");
    }
}
