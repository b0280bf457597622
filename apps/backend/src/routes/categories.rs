use actix_web::{web, HttpResponse};

use super::dto::{self, CategoryResponse};
use crate::error::AppError;
use crate::extractors::{CategoryId, JsonBody, RequestContext};
use crate::http::envelope;
use crate::services::categories::{self, CategoryInput};
use crate::state::app_state::AppState;

async fn create_category(
    ctx: RequestContext,
    body: JsonBody<CategoryInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category =
        categories::create_category(&app_state, ctx.subject_id, body.into_inner()).await?;
    Ok(envelope::created(
        "Category created successfully",
        CategoryResponse::from(category),
    ))
}

async fn list_categories(
    ctx: RequestContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let categories = categories::list_categories(&app_state, ctx.subject_id).await?;
    Ok(envelope::ok(
        "Categories retrieved successfully",
        dto::all::<_, CategoryResponse>(categories),
    ))
}

async fn get_category(
    ctx: RequestContext,
    category_id: CategoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category = categories::get_category(&app_state, ctx.subject_id, category_id.0).await?;
    Ok(envelope::ok(
        "Category retrieved successfully",
        CategoryResponse::from(category),
    ))
}

async fn update_category(
    ctx: RequestContext,
    category_id: CategoryId,
    body: JsonBody<CategoryInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category = categories::rename_category(
        &app_state,
        ctx.subject_id,
        category_id.0,
        body.into_inner(),
    )
    .await?;
    Ok(envelope::ok(
        "Category updated successfully",
        CategoryResponse::from(category),
    ))
}

async fn delete_category(
    ctx: RequestContext,
    category_id: CategoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    categories::delete_category(&app_state, ctx.subject_id, category_id.0).await?;
    Ok(envelope::message("Category deleted successfully."))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/category")
            .route(web::post().to(create_category))
            .route(web::get().to(list_categories)),
    )
    .service(
        web::resource("/category/{categoryId}")
            .route(web::get().to(get_category))
            .route(web::put().to(update_category))
            .route(web::delete().to(delete_category)),
    );
}
