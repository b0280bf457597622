//! SeaORM adapter for categories.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::dates;
use crate::entities::categories;

pub mod dto;

pub use dto::CategoryCreate;

pub async fn find_all_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .filter(categories::Column::UserId.eq(owner_id))
        .order_by_asc(categories::Column::Name)
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}

pub async fn find_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(category_id)
        .filter(categories::Column::UserId.eq(owner_id))
        .one(conn)
        .await
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CategoryCreate,
) -> Result<categories::Model, sea_orm::DbErr> {
    let now = dates::now();
    categories::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn rename_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: categories::Model,
    name: String,
) -> Result<categories::Model, sea_orm::DbErr> {
    let mut active = current.into_active_model();
    active.name = Set(name);
    active.updated_at = Set(dates::now());
    active.update(conn).await
}

pub async fn delete_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = categories::Entity::delete_many()
        .filter(categories::Column::Id.eq(category_id))
        .filter(categories::Column::UserId.eq(owner_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
