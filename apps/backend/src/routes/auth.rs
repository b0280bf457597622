use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::dto::UserResponse;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::http::envelope;
use crate::services::auth::{self, LoginInput, RegisterInput};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub token: String,
}

async fn register(
    body: JsonBody<RegisterInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = auth::register(&app_state, body.into_inner()).await?;
    Ok(envelope::created("Register success", UserResponse::from(user)))
}

async fn login(
    body: JsonBody<LoginInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = auth::login(&app_state, body.into_inner()).await?;
    Ok(envelope::ok(
        "Login success",
        LoginResponse {
            username: outcome.username,
            token: outcome.token,
        },
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
