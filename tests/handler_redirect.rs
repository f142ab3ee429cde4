mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use seqlink::api::handlers::{redirect_handler, shorten_handler};
use serde_json::json;
use sqlx::PgPool;

fn app(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_to_original_url(pool: PgPool) {
    common::create_test_url(&pool, "abc", "https://example.com/target").await;
    let server = app(pool);

    let response = server.get("/abc").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/target"
    );
}

#[sqlx::test]
async fn test_redirect_unknown_short_id_is_not_found(pool: PgPool) {
    let server = app(pool);

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "URL not found");
}

#[sqlx::test]
async fn test_shorten_then_redirect_round_trip(pool: PgPool) {
    let server = app(pool);

    let created = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "example.com/some/page" }))
        .await;
    created.assert_status_ok();

    let short_id = created.json::<serde_json::Value>()["shortId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{short_id}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/some/page"
    );
}
