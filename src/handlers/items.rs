//! Items CRUD handlers: create, list, read, replace, merge, delete, head, options.
//! Validation runs before any store call; store absence becomes 404 here.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::model::{ItemPatch, NewItem, ReplaceItem};
use crate::response::{allow_header, created, json_head_headers, ok, TOTAL_COUNT_HEADER};
use crate::service::{invalid_id, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

pub const COLLECTION_METHODS: &[&str] = &["GET", "POST", "OPTIONS"];
pub const ITEM_METHODS: &[&str] = &["GET", "HEAD", "PUT", "PATCH", "DELETE", "OPTIONS"];

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("item {}", id))
}

pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewItem>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_new(&body)?;
    let item = state.store.create(&body.name, body.quantity).await?;
    Ok(created(item))
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let page = RequestValidator::page(&params)?;
    let items = state.store.list(page).await?;
    let total = state.store.count().await?;
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    Ok((StatusCode::OK, headers, Json(items)))
}

pub async fn read_item(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let item = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(ok(item))
}

/// Same lookup as GET; answers with the GET headers and no body.
pub async fn head_item(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let item = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, json_head_headers(&item)))
}

pub async fn replace_item(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
    JsonBody(body): JsonBody<ReplaceItem>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    RequestValidator::validate_replace(id, &body)?;
    let item = state
        .store
        .replace(id, &body.name, body.quantity)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(item))
}

pub async fn merge_item(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
    JsonBody(body): JsonBody<ItemPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    RequestValidator::validate_patch(&body)?;
    let item = state.store.merge(id, &body).await?.ok_or_else(|| not_found(id))?;
    Ok(ok(item))
}

/// 204 when a row was removed, 404 when there was none.
pub async fn delete_item(
    State(state): State<AppState>,
    PathParam(id_str): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `/items/example-cookie` is routed to the cookie example, so the item methods it would
/// otherwise reach answer as they would for any other non-integer id.
pub async fn cookie_segment_as_id() -> AppError {
    invalid_id("example-cookie")
}

pub async fn options_items() -> impl IntoResponse {
    (StatusCode::OK, allow_header(COLLECTION_METHODS))
}

pub async fn options_item() -> impl IntoResponse {
    (StatusCode::OK, allow_header(ITEM_METHODS))
}
