use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::debug;

use crate::domain::TaskFilterCriteria;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Task listing criteria parsed from the query string.
///
/// Unknown keys are ignored. Values are kept raw; the filter compiler owns
/// their validation so that the first invalid field wins.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery(pub TaskFilterCriteria);

impl FilterQuery {
    pub fn into_inner(self) -> TaskFilterCriteria {
        self.0
    }
}

impl FromRequest for FilterQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = web::Query::<TaskFilterCriteria>::from_query(req.query_string())
            .map(|q| FilterQuery(q.into_inner()))
            .map_err(|e| {
                debug!(error = %e, "query string rejected");
                AppError::invalid(ErrorCode::BadRequest, "Malformed query string")
            });
        ready(parsed)
    }
}
