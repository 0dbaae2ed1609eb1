use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::http::{Method, Request, StatusCode, header};
use axum::body::Body;
use chrono::Duration;
use sea_orm::{DatabaseBackend, MockDatabase, Value};
use serde_json::json;

use bazaar_auth_types::cookie::BAZAAR_ACCESS_TOKEN;
use bazaar_auth_types::token::issue_access_token;
use bazaar_testing::auth::MockAuth;
use bazaar_testing::http::{get, request, send, send_json};

use bazaar_users::router::build_router;
use bazaar_users::state::AppState;

use crate::helpers::JWT_SECRET;

fn app_with(db: MockDatabase) -> Router {
    build_router(AppState {
        db: Arc::new(db.into_connection()),
        jwt_secret: JWT_SECRET.to_owned(),
        cookie_domain: "localhost".to_owned(),
        auth_token_ttl: Duration::seconds(600),
    })
}

fn app() -> Router {
    app_with(MockDatabase::new(DatabaseBackend::Postgres))
}

/// A database whose next query is a `COUNT(*)` returning `n`.
fn counting(n: i64) -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", Value::from(n))])]])
}

#[tokio::test]
async fn should_answer_health_checks_with_request_id() {
    let response = send(app(), get("/healthz", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let response = send(app(), get("/readyz", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

fn assert_unauthorized(status: StatusCode, body: &serde_json::Value) {
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
    assert_eq!(body["kind"], "UNAUTHORIZED");
    assert_eq!(body["message"], "authentication credentials were not provided");
}

#[tokio::test]
async fn should_require_identity_for_own_profile() {
    let (status, body) = send_json(app(), get("/users/@me", None)).await;
    assert_unauthorized(status, &body);
}

#[tokio::test]
async fn should_require_identity_for_staff_routes() {
    let (status, body) = send_json(app(), get("/staff/users", None)).await;
    assert_unauthorized(status, &body);
}

#[tokio::test]
async fn should_reject_malformed_address_id_with_envelope() {
    let auth = MockAuth::random();
    let (status, body) = send_json(app(), get("/users/@me/addresses/abc", Some(&auth))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["kind"], "MALFORMED_PATH");
    assert_eq!(body["message"], "malformed path parameter");
}

#[tokio::test]
async fn should_reject_malformed_user_id_behind_staff_gate() {
    let auth = MockAuth::random();
    let (status, body) =
        send_json(app_with(counting(1)), get("/staff/users/not-a-uuid", Some(&auth))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MALFORMED_PATH");
}

#[tokio::test]
async fn should_refuse_staff_routes_to_non_staff() {
    let auth = MockAuth::random();
    let (status, body) = send_json(app_with(counting(0)), get("/staff/users", Some(&auth))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);
    assert_eq!(body["kind"], "FORBIDDEN");
    assert_eq!(
        body["message"],
        "You currently do not have access to this resource"
    );
}

#[tokio::test]
async fn should_report_field_errors_on_invalid_registration() {
    let payload = json!({
        "mobile": "123",
        "email": "not-an-email",
        "first_name": "Ada",
        "last_name": "Obi",
    });
    let (status, body) = send_json(
        app(),
        request(Method::POST, "/users", None, Some(&payload)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["errors"]["mobile"], "Enter a valid mobile number");
    assert_eq!(body["errors"]["email"], "Enter a valid email address");
}

#[tokio::test]
async fn should_reject_unknown_user_type() {
    let payload = json!({
        "mobile": "08012345678",
        "first_name": "Ada",
        "last_name": "Obi",
        "type": 9,
    });
    let (status, body) = send_json(
        app(),
        request(Method::POST, "/users", None, Some(&payload)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_CHOICE");
    assert_eq!(body["message"], "9 is not a valid choice for type");
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/code")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"mobile\":"))
        .unwrap();
    let (status, body) = send_json(app(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MALFORMED_BODY");
}

#[tokio::test]
async fn should_verify_user_existence_by_mobile() {
    let (status, body) = send_json(
        app_with(counting(1)),
        get("/users/verify?mobile=08012345678", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");
    assert_eq!(body["data"]["exists"], true);
}

#[tokio::test]
async fn should_require_a_lookup_to_verify() {
    let (status, body) = send_json(app(), get("/users/verify", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_missing_access_token_cookie() {
    let (status, body) = send_json(app(), get("/auth/token", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "INVALID_ACCESS_TOKEN");
}

#[tokio::test]
async fn should_describe_valid_access_token() {
    let user_id = uuid::Uuid::now_v7();
    let (token, exp) =
        issue_access_token(user_id, vec!["buyer".to_owned()], JWT_SECRET).unwrap();
    let req = Request::builder()
        .uri("/auth/token")
        .header(header::COOKIE, format!("{BAZAAR_ACCESS_TOKEN}={token}"))
        .body(Body::empty())
        .unwrap();

    let response = send(app(), req).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-bazaar-access-token-expires"],
        exp.to_string().as_str()
    );
    let body = bazaar_testing::http::body_json(response).await;
    assert_eq!(body["data"]["user_id"], user_id.to_string());
    assert_eq!(body["data"]["groups"], json!(["buyer"]));
}

#[tokio::test]
async fn should_clear_cookie_on_revoke() {
    let auth = MockAuth::random();
    let response = send(
        app(),
        request::<()>(Method::DELETE, "/auth/token", Some(&auth), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with(&format!("{BAZAAR_ACCESS_TOKEN}=")));
}
