//! SeaORM adapter for users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::dates;
use crate::entities::users;

pub mod dto;

pub use dto::{UserCreate, UserUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

/// First user, other than `exclude_id`, holding `username` or `email`.
pub async fn find_conflicting<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let mut query = users::Entity::find().filter(
        Condition::any()
            .add(users::Column::Username.eq(username))
            .add(users::Column::Email.eq(email)),
    );
    if let Some(id) = exclude_id {
        query = query.filter(users::Column::Id.ne(id));
    }
    query.one(conn).await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = dates::now();
    users::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserUpdate,
) -> Result<users::Model, sea_orm::DbErr> {
    users::ActiveModel {
        id: Set(dto.id),
        username: Set(dto.username),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: NotSet,
        updated_at: Set(dates::now()),
    }
    .update(conn)
    .await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
