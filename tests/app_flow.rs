mod common;

use alias_shortener::routes::build_router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

async fn app_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool).await;
    TestServer::new(build_router(state)).unwrap()
}

#[sqlx::test(migrations = false)]
async fn test_save_conflict_delete_resolve_scenario(pool: SqlitePool) {
    let server = app_server(pool).await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "abc123" }))
        .await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["alias"], "https://s.example.com/abc123");

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://other.com", "alias": "abc123" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "url already exists");

    let response = server.get("/abc123").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/");

    let response = server.delete("/url/abc123").await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["deleted_url"], "https://example.com/");

    server
        .get("/abc123")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn test_generated_alias_resolves(pool: SqlitePool) {
    let server = app_server(pool).await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://rust-lang.org" }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let link = json["alias"].as_str().unwrap();
    let alias = link.strip_prefix(common::DOMAIN_PREFIX).unwrap();

    let response = server.get(&format!("/{alias}")).await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://rust-lang.org/");
}

#[sqlx::test(migrations = false)]
async fn test_url_with_embedded_newline_is_rejected(pool: SqlitePool) {
    let server = app_server(pool).await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "nl" }))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "field url is not valid");

    server.get("/nl").await.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn test_non_ascii_url_resolves(pool: SqlitePool) {
    let server = app_server(pool).await;

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com/café?q=ü", "alias": "cafe" }))
        .await
        .assert_status_ok();

    let response = server.get("/cafe").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/caf%C3%A9?q=%C3%BC"
    );
}

#[sqlx::test(migrations = false)]
async fn test_response_carries_request_id(pool: SqlitePool) {
    let server = app_server(pool).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert!(!response.header("x-request-id").is_empty());

    let response = server
        .get("/health")
        .add_header("x-request-id", "client-supplied-id")
        .await;
    assert_eq!(response.header("x-request-id"), "client-supplied-id");
}

#[sqlx::test(migrations = false)]
async fn test_fixed_routes_take_precedence(pool: SqlitePool) {
    let server = app_server(pool).await;

    server.get("/health").await.assert_status_ok();
    server
        .get("/url")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
