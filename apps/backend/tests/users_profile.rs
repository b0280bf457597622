mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{assert_error, assert_success, read_envelope};
use backend_test_support::unique_helpers::{unique_email, unique_username};
use common::{create_task, get_as, login, prod_app, signup};
use serde_json::json;

#[actix_web::test]
async fn user_directory_is_public() {
    let app = prod_app().await;
    let ada = signup(&app, "ada").await;
    let bob = signup(&app, "bob").await;

    let req = test::TestRequest::get().uri("/api/user/").to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    let names: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert!(names.contains(&ada.username.as_str()));
    assert!(names.contains(&bob.username.as_str()));
}

#[actix_web::test]
async fn user_directory_answers_without_trailing_slash() {
    let app = prod_app().await;
    let ada = signup(&app, "ada").await;

    let req = test::TestRequest::get().uri("/api/user").to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(data
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["username"] == ada.username.as_str()));
}

#[actix_web::test]
async fn profile_is_the_callers_account() {
    let app = prod_app().await;
    let user = signup(&app, "me").await;

    let data = assert_success(get_as(&app, &user, "/api/user/profile").await, StatusCode::OK).await;
    assert_eq!(data["id"], user.id);
    assert_eq!(data["username"], user.username.as_str());
    assert_eq!(data["email"], user.email.as_str());
}

#[actix_web::test]
async fn profile_requires_a_token() {
    let app = prod_app().await;
    let req = test::TestRequest::get().uri("/api/user/profile").to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        None,
    )
    .await;
}

#[actix_web::test]
async fn update_replaces_credentials() {
    let app = prod_app().await;
    let user = signup(&app, "mover").await;
    let new_name = unique_username("moved");
    let new_password = "N3w!password";

    let req = test::TestRequest::put()
        .uri("/api/user/profile")
        .insert_header(user.bearer())
        .set_json(json!({
            "username": new_name,
            "email": unique_email("moved"),
            "password": new_password,
        }))
        .to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data["username"], new_name.as_str());

    login(&app, &new_name, new_password).await;
}

#[actix_web::test]
async fn update_cannot_take_anothers_username() {
    let app = prod_app().await;
    let user = signup(&app, "first").await;
    let other = signup(&app, "second").await;

    let req = test::TestRequest::put()
        .uri("/api/user/profile")
        .insert_header(user.bearer())
        .set_json(json!({
            "username": other.username,
            "email": user.email,
            "password": "An0ther!pass",
        }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "USERNAME_TAKEN",
        None,
    )
    .await;
}

#[actix_web::test]
async fn keeping_own_username_is_not_a_conflict() {
    let app = prod_app().await;
    let user = signup(&app, "same").await;

    let req = test::TestRequest::put()
        .uri("/api/user/profile")
        .insert_header(user.bearer())
        .set_json(json!({
            "username": user.username,
            "email": user.email,
            "password": "Upd4ted!pass",
        }))
        .to_request();
    assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
}

#[actix_web::test]
async fn delete_removes_account_and_its_tasks() {
    let app = prod_app().await;
    let user = signup(&app, "leaver").await;
    create_task(
        &app,
        &user,
        json!({ "title": "orphan", "dueDate": "2025-05-01" }),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri("/api/user/profile")
        .insert_header(user.bearer())
        .to_request();
    let (status, envelope) = read_envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        envelope.message.as_deref(),
        Some(format!("user {} deleted", user.username).as_str())
    );

    // The token still verifies but the account is gone
    assert_error(
        get_as(&app, &user, "/api/user/profile").await,
        StatusCode::NOT_FOUND,
        "USER_NOT_FOUND",
        None,
    )
    .await;
    let data = assert_success(get_as(&app, &user, "/api/user/tasks").await, StatusCode::OK).await;
    assert_eq!(data, json!([]));
}
