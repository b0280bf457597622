//! Category repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::categories_sea as categories_adapter;
use crate::adapters::categories_sea::CategoryCreate;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<Category>, DomainError> {
    let rows = categories_adapter::find_all_for_owner(conn, owner_id).await?;
    Ok(rows.into_iter().map(Category::from).collect())
}

pub async fn find_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
) -> Result<Option<Category>, DomainError> {
    let row = categories_adapter::find_owned(conn, owner_id, category_id).await?;
    Ok(row.map(Category::from))
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    name: String,
) -> Result<Category, DomainError> {
    let row = categories_adapter::create_category(
        conn,
        CategoryCreate {
            user_id: owner_id,
            name,
        },
    )
    .await?;
    Ok(Category::from(row))
}

pub async fn rename_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
    name: String,
) -> Result<Option<Category>, DomainError> {
    let Some(current) = categories_adapter::find_owned(conn, owner_id, category_id).await? else {
        return Ok(None);
    };
    let row = categories_adapter::rename_category(conn, current, name).await?;
    Ok(Some(Category::from(row)))
}

pub async fn delete_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    category_id: i64,
) -> Result<bool, DomainError> {
    Ok(categories_adapter::delete_owned(conn, owner_id, category_id).await? > 0)
}

impl From<crate::entities::categories::Model> for Category {
    fn from(model: crate::entities::categories::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
