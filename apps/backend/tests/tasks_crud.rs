mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{assert_error, assert_success};
use common::{create_task, get_as, prod_app, signup};
use serde_json::json;

#[actix_web::test]
async fn create_applies_defaults() {
    let app = prod_app().await;
    let user = signup(&app, "maker").await;

    let task = create_task(
        &app,
        &user,
        json!({ "title": "  write report ", "dueDate": "2025-06-01" }),
    )
    .await;

    assert_eq!(task["title"], "write report");
    assert_eq!(task["status"], "PENDING");
    assert_eq!(task["priority"], "MEDIUM");
    assert_eq!(task["dueDate"], "2025-06-01T00:00:00Z");
    assert_eq!(task["userId"], user.id);
    assert!(task["description"].is_null());
}

#[actix_web::test]
async fn empty_status_and_priority_take_defaults() {
    let app = prod_app().await;
    let user = signup(&app, "blanks").await;

    let task = create_task(
        &app,
        &user,
        json!({ "title": "t", "dueDate": "2025-06-01", "status": "", "priority": "" }),
    )
    .await;
    assert_eq!(task["status"], "PENDING");
    assert_eq!(task["priority"], "MEDIUM");
}

#[actix_web::test]
async fn create_validates_body() {
    let app = prod_app().await;
    let user = signup(&app, "strict").await;

    let cases = [
        (json!({ "dueDate": "2025-06-01" }), "MISSING_FIELD"),
        (json!({ "title": "t" }), "MISSING_FIELD"),
        (json!({ "title": "t", "dueDate": "soon" }), "INVALID_DATE"),
        (
            json!({ "title": "t", "dueDate": "2025-06-01", "status": "DONE" }),
            "INVALID_STATUS",
        ),
        (
            json!({ "title": "t", "dueDate": "2025-06-01", "priority": "urgent" }),
            "INVALID_PRIORITY",
        ),
    ];
    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/user/tasks")
            .insert_header(user.bearer())
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
async fn malformed_json_is_a_bad_request() {
    let app = prod_app().await;
    let user = signup(&app, "typo").await;

    let req = test::TestRequest::post()
        .uri("/api/user/tasks")
        .insert_header(user.bearer())
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        None,
    )
    .await;
}

#[actix_web::test]
async fn get_update_and_clear_description() {
    let app = prod_app().await;
    let user = signup(&app, "editor").await;
    let task = create_task(
        &app,
        &user,
        json!({ "title": "draft", "description": "notes", "dueDate": "2025-06-01" }),
    )
    .await;
    let uri = format!("/api/user/tasks/{}", task["id"]);

    let fetched = assert_success(get_as(&app, &user, &uri).await, StatusCode::OK).await;
    assert_eq!(fetched["description"], "notes");

    // Absent description is left alone
    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "title": "final", "priority": "HIGH" }))
        .to_request();
    let updated = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(updated["title"], "final");
    assert_eq!(updated["priority"], "HIGH");
    assert_eq!(updated["description"], "notes");

    // Explicit null clears it
    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "description": null }))
        .to_request();
    let cleared = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(cleared["description"].is_null());
    assert_eq!(cleared["title"], "final");
}

#[actix_web::test]
async fn status_change() {
    let app = prod_app().await;
    let user = signup(&app, "mover").await;
    let task = create_task(&app, &user, json!({ "title": "t", "dueDate": "2025-06-01" })).await;
    let uri = format!("/api/user/tasks/{}/status", task["id"]);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "status": "COMPLETED" }))
        .to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data["status"], "COMPLETED");

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "status": "done" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "INVALID_STATUS",
        None,
    )
    .await;
}

#[actix_web::test]
async fn delete_then_missing() {
    let app = prod_app().await;
    let user = signup(&app, "cleaner").await;
    let task = create_task(&app, &user, json!({ "title": "t", "dueDate": "2025-06-01" })).await;
    let uri = format!("/api/user/tasks/{}", task["id"]);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(user.bearer())
        .to_request();
    let data = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(data.is_null());

    assert_error(
        get_as(&app, &user, &uri).await,
        StatusCode::NOT_FOUND,
        "TASK_NOT_FOUND",
        None,
    )
    .await;
}

#[actix_web::test]
async fn other_users_tasks_are_invisible() {
    let app = prod_app().await;
    let owner = signup(&app, "owner").await;
    let intruder = signup(&app, "intruder").await;
    let task = create_task(&app, &owner, json!({ "title": "t", "dueDate": "2025-06-01" })).await;
    let uri = format!("/api/user/tasks/{}", task["id"]);

    assert_error(
        get_as(&app, &intruder, &uri).await,
        StatusCode::NOT_FOUND,
        "TASK_NOT_FOUND",
        Some("Task not found or not accessible."),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(intruder.bearer())
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "TASK_NOT_FOUND",
        None,
    )
    .await;

    // Still there for the owner
    assert_success(get_as(&app, &owner, &uri).await, StatusCode::OK).await;
}

#[actix_web::test]
async fn non_numeric_id_is_invalid() {
    let app = prod_app().await;
    let user = signup(&app, "typist").await;

    for uri in ["/api/user/tasks/abc", "/api/user/tasks/0", "/api/user/tasks/-4"] {
        assert_error(
            get_as(&app, &user, uri).await,
            StatusCode::BAD_REQUEST,
            "INVALID_ID",
            None,
        )
        .await;
    }
}
