//! Assertions for the `{ statusCode, message, data, error }` response envelope.
//!
//! Deliberately independent of the backend's own types so a change to the
//! wire shape breaks these helpers instead of silently following along.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeLike {
    pub status_code: u16,
    pub message: Option<String>,
    pub data: Value,
    pub error: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

/// Read the body of `resp` and decode it as an envelope.
pub async fn read_envelope<B>(resp: ServiceResponse<B>) -> (StatusCode, EnvelopeLike)
where
    B: MessageBody,
{
    let status = resp.status();
    let bytes = actix_web::test::read_body(resp).await;
    let text = String::from_utf8(bytes.to_vec()).expect("body should be UTF-8");
    let envelope: EnvelopeLike = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("body should be an envelope ({e}): {text}"));
    (status, envelope)
}

/// Assert that `resp` is a successful envelope and return its `data`.
pub async fn assert_success<B>(resp: ServiceResponse<B>, expected_status: StatusCode) -> Value
where
    B: MessageBody,
{
    let (status, envelope) = read_envelope(resp).await;
    assert_eq!(status, expected_status, "unexpected status: {envelope:?}");
    assert_eq!(envelope.status_code, expected_status.as_u16());
    assert!(envelope.error.is_none(), "error set on success: {envelope:?}");
    envelope.data
}

/// Assert the error contract: matching status, stable code, null data and a
/// trace id in the body equal to the `x-trace-id` header.
pub async fn assert_error<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
    message_contains: Option<&str>,
) -> EnvelopeLike
where
    B: MessageBody,
{
    let header_trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let (status, envelope) = read_envelope(resp).await;
    assert_eq!(status, expected_status, "unexpected status: {envelope:?}");
    assert_eq!(envelope.status_code, expected_status.as_u16());
    assert_eq!(envelope.error.as_deref(), Some(expected_code));
    assert!(envelope.data.is_null(), "data must be null on error");

    let header_trace = header_trace.expect("x-trace-id header should be present");
    assert_eq!(
        envelope.trace_id.as_deref(),
        Some(header_trace.as_str()),
        "body traceId should match x-trace-id header"
    );

    if let Some(fragment) = message_contains {
        let message = envelope.message.clone().unwrap_or_default();
        assert!(
            message.contains(fragment),
            "expected message to contain '{fragment}', got '{message}'"
        );
    }
    envelope
}
