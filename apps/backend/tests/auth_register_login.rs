mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{assert_error, assert_success, read_envelope};
use backend_test_support::unique_helpers::{unique_email, unique_username};
use common::{login, prod_app, signup, PASSWORD};
use serde_json::json;
use taskdeck::test_support::test_security;
use taskdeck::{verify_access_token, VerifyOutcome};

#[actix_web::test]
async fn register_returns_the_account_without_secrets() {
    let app = prod_app().await;
    let username = unique_username("ada");
    let email = unique_email("ada");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": username, "email": email, "password": PASSWORD }))
        .to_request();
    let (status, envelope) = read_envelope(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(envelope.message.as_deref(), Some("Register success"));
    assert_eq!(envelope.data["username"], username.as_str());
    assert_eq!(envelope.data["email"], email.as_str());
    assert!(envelope.data["id"].as_i64().unwrap() > 0);
    assert!(envelope.data.get("password").is_none());
    assert!(envelope.data.get("passwordHash").is_none());
}

#[actix_web::test]
async fn login_token_carries_the_user_id() {
    let app = prod_app().await;
    let user = signup(&app, "grace").await;

    assert_eq!(
        verify_access_token(&user.token, &test_security()),
        VerifyOutcome::Valid(user.id)
    );
}

#[actix_web::test]
async fn login_reports_username() {
    let app = prod_app().await;
    let user = signup(&app, "linus").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": user.username, "password": PASSWORD }))
        .to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data["username"], user.username.as_str());
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[actix_web::test]
async fn duplicate_username_and_email_conflict() {
    let app = prod_app().await;
    let user = signup(&app, "dup").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": user.username,
            "email": unique_email("other"),
            "password": PASSWORD,
        }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "USERNAME_TAKEN",
        None,
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": unique_username("other"),
            "email": user.email,
            "password": PASSWORD,
        }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "EMAIL_TAKEN",
        None,
    )
    .await;
}

#[actix_web::test]
async fn register_validates_fields() {
    let app = prod_app().await;

    let cases = [
        (
            json!({ "username": unique_username("x"), "password": PASSWORD }),
            "MISSING_FIELD",
        ),
        (
            json!({ "username": unique_username("x"), "email": "not-an-email", "password": PASSWORD }),
            "INVALID_EMAIL",
        ),
        (
            json!({ "username": unique_username("x"), "email": unique_email("x"), "password": "password" }),
            "WEAK_PASSWORD",
        ),
    ];

    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        assert_error(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            code,
            None,
        )
        .await;
    }
}

#[actix_web::test]
async fn bad_credentials_are_unauthorized() {
    let app = prod_app().await;
    let user = signup(&app, "wrongpw").await;

    for body in [
        json!({ "username": user.username, "password": "Wr0ng!password" }),
        json!({ "username": unique_username("ghost"), "password": PASSWORD }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        assert_error(
            test::call_service(&app, req).await,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            None,
        )
        .await;
    }

    // The original password still works
    login(&app, &user.username, PASSWORD).await;
}

#[actix_web::test]
async fn login_requires_both_fields() {
    let app = prod_app().await;
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "someone" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "MISSING_FIELD",
        None,
    )
    .await;
}
