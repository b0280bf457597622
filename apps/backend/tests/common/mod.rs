#![allow(dead_code)]

// tests/common/mod.rs
use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error as ActixError};
use backend_test_support::envelope::assert_success;
use backend_test_support::unique_helpers::{unique_email, unique_username};
use serde_json::{json, Value};
use taskdeck::test_support::{create_test_app, sqlite_state};
use taskdeck::AppState;

pub const PASSWORD: &str = "Secr3t!pass";

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// A registered account and a fresh bearer token for it.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

pub async fn fresh_state() -> AppState {
    sqlite_state().await.expect("build sqlite state")
}

/// Production routes over a fresh in-memory store.
pub async fn prod_app(
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    create_test_app(fresh_state().await).build().await
}

/// Register `prefix_*` through the API, then log in.
pub async fn signup<S>(app: &S, prefix: &str) -> TestUser
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let username = unique_username(prefix);
    let email = unique_email(prefix);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": username, "email": email, "password": PASSWORD }))
        .to_request();
    let user = assert_success(test::call_service(app, req).await, StatusCode::CREATED).await;
    let id = user["id"].as_i64().expect("registered user id");

    let token = login(app, &username, PASSWORD).await;
    TestUser {
        id,
        username,
        email,
        token,
    }
}

pub async fn login<S>(app: &S, username: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let data = assert_success(test::call_service(app, req).await, StatusCode::OK).await;
    data["token"].as_str().expect("token").to_owned()
}

/// `POST /api/user/tasks` as `user`, returning the created task.
pub async fn create_task<S>(app: &S, user: &TestUser, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/user/tasks")
        .insert_header(user.bearer())
        .set_json(body)
        .to_request();
    assert_success(test::call_service(app, req).await, StatusCode::CREATED).await
}

/// `POST /api/user/category` as `user`, returning the created category.
pub async fn create_category<S>(app: &S, user: &TestUser, name: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/user/category")
        .insert_header(user.bearer())
        .set_json(json!({ "name": name }))
        .to_request();
    assert_success(test::call_service(app, req).await, StatusCode::CREATED).await
}

/// Authenticated GET returning the raw response.
pub async fn get_as<S>(app: &S, user: &TestUser, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(user.bearer())
        .to_request();
    test::call_service(app, req).await
}

/// Titles of a task array, sorted.
pub fn titles(data: &Value) -> Vec<String> {
    let mut titles: Vec<String> = data
        .as_array()
        .expect("array data")
        .iter()
        .map(|t| t["title"].as_str().expect("title").to_owned())
        .collect();
    titles.sort();
    titles
}
