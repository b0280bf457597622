use serde::Deserialize;

use super::validation;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::categories::{self, Category};
use crate::state::app_state::AppState;

const NAME_REQUIRED: &str = "Invalid category name. It must be a non-empty string.";

#[derive(Debug, Default, Deserialize)]
pub struct CategoryInput {
    pub name: Option<String>,
}

fn category_not_found() -> AppError {
    AppError::not_found(
        ErrorCode::CategoryNotFound,
        "Category not found or does not belong to this user.",
    )
}

pub async fn create_category(
    state: &AppState,
    subject_id: i64,
    input: CategoryInput,
) -> Result<Category, AppError> {
    let name = validation::required_text(input.name.as_deref(), NAME_REQUIRED)?;
    let db = require_db(state)?;
    // Duplicate names surface as a unique violation → CATEGORY_EXISTS
    Ok(categories::create_category(db, subject_id, name).await?)
}

pub async fn list_categories(state: &AppState, subject_id: i64) -> Result<Vec<Category>, AppError> {
    let db = require_db(state)?;
    Ok(categories::list_categories(db, subject_id).await?)
}

pub async fn get_category(
    state: &AppState,
    subject_id: i64,
    category_id: i64,
) -> Result<Category, AppError> {
    let db = require_db(state)?;
    categories::find_category(db, subject_id, category_id)
        .await?
        .ok_or_else(category_not_found)
}

pub async fn rename_category(
    state: &AppState,
    subject_id: i64,
    category_id: i64,
    input: CategoryInput,
) -> Result<Category, AppError> {
    let name = validation::required_text(input.name.as_deref(), NAME_REQUIRED)?;
    let db = require_db(state)?;
    categories::rename_category(db, subject_id, category_id, name)
        .await?
        .ok_or_else(category_not_found)
}

pub async fn delete_category(
    state: &AppState,
    subject_id: i64,
    category_id: i64,
) -> Result<(), AppError> {
    let db = require_db(state)?;
    if categories::delete_category(db, subject_id, category_id).await? {
        Ok(())
    } else {
        Err(category_not_found())
    }
}
