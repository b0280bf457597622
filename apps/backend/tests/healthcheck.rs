mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use taskdeck::test_support::{create_test_app, test_security};
use taskdeck::AppState;

#[actix_web::test]
async fn health_reports_database_and_migrations() {
    let app = common::prod_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["appVersion"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("dbError").is_none());
    assert!(body["migrations"].as_str().is_some_and(|m| m.starts_with('m')));
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn health_without_database_is_still_up() {
    let app = create_test_app(AppState::new_without_db(test_security()))
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["dbError"].as_str().is_some());
    assert_eq!(body["migrations"], "unknown");
}
