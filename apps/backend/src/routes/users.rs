use actix_web::{web, HttpResponse};

use super::dto::{self, UserResponse};
use crate::error::AppError;
use crate::extractors::{JsonBody, RequestContext};
use crate::http::envelope;
use crate::services::users::{self, ProfileInput};
use crate::state::app_state::AppState;

/// Public directory; mounted outside the auth gate.
pub async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = users::list_users(&app_state).await?;
    Ok(envelope::ok(
        "Success fetching users",
        dto::all::<_, UserResponse>(users),
    ))
}

async fn profile(
    ctx: RequestContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = users::profile(&app_state, ctx.subject_id).await?;
    Ok(envelope::ok("Profile retrieved", UserResponse::from(user)))
}

async fn update_profile(
    ctx: RequestContext,
    body: JsonBody<ProfileInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = users::update_profile(&app_state, ctx.subject_id, body.into_inner()).await?;
    Ok(envelope::ok("User updated", UserResponse::from(user)))
}

async fn delete_profile(
    ctx: RequestContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = users::delete_account(&app_state, ctx.subject_id).await?;
    Ok(envelope::message(&format!("user {} deleted", user.username)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(profile))
            .route(web::put().to(update_profile))
            .route(web::delete().to(delete_profile)),
    );
}
