use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::error::AppError;

/// Authenticated subject of the current request.
///
/// Inserted into the request extensions by the auth gate once verification
/// has completed successfully, and only then. Handlers take it as an
/// argument; extraction fails with `UNAUTHENTICATED` when it is absent, so a
/// handler mounted outside the gate can never observe an empty identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub subject_id: i64,
}

impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<RequestContext>()
                .copied()
                .ok_or_else(AppError::unauthenticated),
        )
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::errors::ErrorCode;

    #[actix_web::test]
    async fn reads_the_inserted_context() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(RequestContext { subject_id: 7 });

        let ctx = RequestContext::extract(&req).await.unwrap();
        assert_eq!(ctx.subject_id, 7);
    }

    #[actix_web::test]
    async fn absent_context_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();

        let err = RequestContext::extract(&req).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthenticated);
    }
}
