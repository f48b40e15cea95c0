//! Response helpers: bare JSON bodies with a status, and the `{"data": ...}` message shape.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::Serialize;

/// Header carrying the total row count on list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Serialize)]
pub struct DataMessage<T> {
    pub data: T,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message<T: Serialize>(data: T) -> Json<DataMessage<T>> {
    Json(DataMessage { data })
}

/// Headers a GET for `body` would carry, for answering HEAD without a body.
pub fn json_head_headers<T: Serialize>(body: &T) -> HeaderMap {
    let len = serde_json::to_vec(body).map(|b| b.len()).unwrap_or(0);
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    headers
}

/// `Allow` header listing `methods`.
pub fn allow_header(methods: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(v) = HeaderValue::from_str(&methods.join(", ")) {
        headers.insert(header::ALLOW, v);
    }
    headers
}
