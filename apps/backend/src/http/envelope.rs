//! Success envelope: `{ statusCode, message, data, error: null }`.
//!
//! Errors render the same shape from `AppError::error_response`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub status_code: u16,
    pub message: Option<String>,
    pub data: Option<T>,
    pub error: Option<&'static str>,
}

pub fn respond<T: Serialize>(
    status: StatusCode,
    message: Option<&str>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        status_code: status.as_u16(),
        message: message.map(str::to_string),
        data,
        error: None,
    })
}

/// 200 with a payload.
pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    respond(StatusCode::OK, Some(message), Some(data))
}

/// 201 with the created resource.
pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    respond(StatusCode::CREATED, Some(message), Some(data))
}

/// 200 with `data: null`.
pub fn message(text: &str) -> HttpResponse {
    respond::<()>(StatusCode::OK, Some(text), None)
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    async fn body_of(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn created_wraps_data() {
        let resp = created("Task created", json!({"id": 1}));
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            body_of(resp).await,
            json!({"statusCode": 201, "message": "Task created", "data": {"id": 1}, "error": null})
        );
    }

    #[actix_web::test]
    async fn message_only_has_null_data() {
        let body = body_of(message("Task deleted successfully")).await;
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["error"], Value::Null);
    }

    #[actix_web::test]
    async fn empty_list_is_still_an_array() {
        let body = body_of(ok("Tasks retrieved", Vec::<u8>::new())).await;
        assert_eq!(body["data"], json!([]));
    }
}
