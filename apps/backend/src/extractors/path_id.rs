use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a positive integer id from the named path segment.
pub fn parse_path_id(req: &HttpRequest, param: &str) -> Result<i64, AppError> {
    let raw = req.match_info().get(param).ok_or_else(|| {
        AppError::invalid(ErrorCode::InvalidId, format!("Missing {param} parameter"))
    })?;

    let id = raw.parse::<i64>().map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidId,
            format!("Invalid {param} format. It must be a number."),
        )
    })?;

    if id <= 0 {
        return Err(AppError::invalid(
            ErrorCode::InvalidId,
            format!("{param} must be positive, got: {id}"),
        ));
    }

    Ok(id)
}

macro_rules! path_id_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = AppError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_path_id(req, $param).map($name))
            }
        }
    };
}

path_id_extractor!(
    /// `{taskId}` path segment.
    TaskId,
    "taskId"
);
path_id_extractor!(
    /// `{categoryId}` path segment.
    CategoryId,
    "categoryId"
);
path_id_extractor!(
    /// `{id}` of a task-category link.
    LinkId,
    "id"
);
