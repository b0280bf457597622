use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::AuthGate;

pub mod auth;
pub mod categories;
pub mod dto;
pub mod health;
pub mod task_categories;
pub mod tasks;
pub mod users;

/// Register every route. Shared by `main.rs` and the test app builder, so
/// the auth gate placement is identical in both.
///
/// - `/health`, `/api/auth/**` and `GET /api/user[/]` are public.
/// - Everything else under `/api/user` sits behind [`AuthGate`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);

    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Must precede the gated scope, which also matches these paths
    cfg.service(
        web::resource(["/api/user", "/api/user/"]).route(web::get().to(users::list_users)),
    );

    cfg.service(
        web::scope("/api/user")
            .wrap(AuthGate)
            .configure(users::configure_routes)
            .configure(tasks::configure_routes)
            .configure(categories::configure_routes)
            .configure(task_categories::configure_routes),
    );
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Result<web::Json<()>, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Route not found"))
}
