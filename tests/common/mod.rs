#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use inventory_api::{app_router, connect_pool, ensure_items_table, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Fresh in-memory database with the items table.
pub async fn test_state() -> AppState {
    let pool = connect_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    ensure_items_table(&pool).await.expect("Failed to create items table");
    AppState::new(pool)
}

pub async fn test_app() -> Router {
    app_router(test_state().await, TEST_BODY_LIMIT)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.expect("Router call failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    TestResponse { status, headers, body }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
