mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{assert_error, assert_success};
use common::{create_category, get_as, prod_app, signup};
use serde_json::json;

#[actix_web::test]
async fn create_list_and_get() {
    let app = prod_app().await;
    let user = signup(&app, "sorter").await;

    let work = create_category(&app, &user, "Work").await;
    create_category(&app, &user, "Home").await;
    assert_eq!(work["name"], "Work");
    assert_eq!(work["userId"], user.id);

    let data = assert_success(get_as(&app, &user, "/api/user/category").await, StatusCode::OK).await;
    let mut names: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Home", "Work"]);

    let uri = format!("/api/user/category/{}", work["id"]);
    let fetched = assert_success(get_as(&app, &user, &uri).await, StatusCode::OK).await;
    assert_eq!(fetched["id"], work["id"]);
}

#[actix_web::test]
async fn duplicate_name_conflicts_per_user() {
    let app = prod_app().await;
    let user = signup(&app, "dupe").await;
    let other = signup(&app, "other").await;
    create_category(&app, &user, "Errands").await;

    let req = test::TestRequest::post()
        .uri("/api/user/category")
        .insert_header(user.bearer())
        .set_json(json!({ "name": "Errands" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "CATEGORY_EXISTS",
        None,
    )
    .await;

    // Another user may reuse the name
    create_category(&app, &other, "Errands").await;
}

#[actix_web::test]
async fn blank_name_is_rejected() {
    let app = prod_app().await;
    let user = signup(&app, "blank").await;

    for body in [json!({}), json!({ "name": "   " })] {
        let req = test::TestRequest::post()
            .uri("/api/user/category")
            .insert_header(user.bearer())
            .set_json(body)
            .to_request();
        assert_error(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "MISSING_FIELD",
            None,
        )
        .await;
    }
}

#[actix_web::test]
async fn rename_and_delete() {
    let app = prod_app().await;
    let user = signup(&app, "renamer").await;
    let category = create_category(&app, &user, "Old").await;
    let uri = format!("/api/user/category/{}", category["id"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "name": "New" }))
        .to_request();
    let renamed = assert_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(renamed["name"], "New");

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(user.bearer())
        .to_request();
    assert_success(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_error(
        get_as(&app, &user, &uri).await,
        StatusCode::NOT_FOUND,
        "CATEGORY_NOT_FOUND",
        None,
    )
    .await;
}

#[actix_web::test]
async fn foreign_category_is_not_found() {
    let app = prod_app().await;
    let owner = signup(&app, "owner").await;
    let intruder = signup(&app, "intruder").await;
    let category = create_category(&app, &owner, "Private").await;
    let uri = format!("/api/user/category/{}", category["id"]);

    assert_error(
        get_as(&app, &intruder, &uri).await,
        StatusCode::NOT_FOUND,
        "CATEGORY_NOT_FOUND",
        None,
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(intruder.bearer())
        .set_json(json!({ "name": "Mine now" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "CATEGORY_NOT_FOUND",
        None,
    )
    .await;
}
