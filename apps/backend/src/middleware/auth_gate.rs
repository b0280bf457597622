//! Bearer-token gate for protected scopes.
//!
//! The gate awaits the [`CredentialVerifier`] before it touches the inner
//! service. Only a `Valid` outcome inserts the [`RequestContext`] and calls
//! downstream; every other outcome (including a verification timeout)
//! short-circuits with an error envelope and the inner service is never
//! called.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::auth::verifier::VerifyOutcome;
use crate::error::AppError;
use crate::extractors::RequestContext;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match bearer_token(req.headers()) {
                Ok(token) => token,
                Err(err) => {
                    debug!(path = %req.path(), "rejected request without bearer token");
                    return Ok(reject(req, err));
                }
            };

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                return Ok(reject(req, AppError::internal("AppState not configured")));
            };

            let outcome =
                tokio::time::timeout(state.verify_timeout, state.verifier.verify(&token)).await;

            let err = match outcome {
                Ok(VerifyOutcome::Valid(subject_id)) => {
                    req.extensions_mut().insert(RequestContext { subject_id });
                    return service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body);
                }
                Ok(VerifyOutcome::Malformed) => AppError::malformed_token(),
                Ok(VerifyOutcome::InvalidSignature) => AppError::invalid_signature(),
                Ok(VerifyOutcome::Expired) => AppError::expired_token(),
                Err(_elapsed) => {
                    warn!(
                        timeout_ms = state.verify_timeout.as_millis() as u64,
                        "credential verification timed out"
                    );
                    AppError::verify_timeout()
                }
            };

            debug!(token = %Redacted(&token), code = %err.code(), "credential rejected");
            Ok(reject(req, err))
        })
    }
}

/// Token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::missing_bearer)?;
    let raw = value.to_str().map_err(|_| AppError::missing_bearer())?;

    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => {
            Ok(token.to_string())
        }
        _ => Err(AppError::missing_bearer()),
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(err.error_response()).map_into_right_body()
}
