//! Payload examples: how a client passes data in the path, query, body, headers and cookies.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam, SessionToken, UserAgent};
use crate::response::{message, DataMessage};
use crate::service::parse_int_param;
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const QUERY_DEFAULT_SKIP: i64 = 0;
pub const QUERY_DEFAULT_LIMIT: i64 = 10;
pub const QUERY_MAX_LIMIT: i64 = 100;

pub async fn home() -> Json<DataMessage<&'static str>> {
    message("Hello world!")
}

pub async fn homepage() -> Json<DataMessage<&'static str>> {
    message("Handler")
}

pub async fn path_parameter(
    PathParam((name, age)): PathParam<(String, String)>,
) -> Result<Json<DataMessage<String>>, AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(message(format!("Name is : {}, age is: {}", name, age)))
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct QueryExample {
    pub data_type: String,
    pub skip: i64,
    pub limit: i64,
}

/// `data_type` required; `skip` >= 0 (default 0); `limit` <= 100 (default 10).
pub fn parse_query_example(params: &HashMap<String, String>) -> Result<QueryExample, AppError> {
    let data_type = params
        .get("data_type")
        .cloned()
        .ok_or_else(|| AppError::Validation("data_type is required".into()))?;
    let skip = parse_int_param(params, "skip")?.unwrap_or(QUERY_DEFAULT_SKIP);
    let limit = parse_int_param(params, "limit")?.unwrap_or(QUERY_DEFAULT_LIMIT);
    if skip < 0 {
        return Err(AppError::Validation("skip must be at least 0".into()));
    }
    if limit > QUERY_MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be at most {}",
            QUERY_MAX_LIMIT
        )));
    }
    Ok(QueryExample {
        data_type,
        skip,
        limit,
    })
}

pub async fn query_parameter(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<QueryExample>, AppError> {
    Ok(Json(parse_query_example(&params)?))
}

/// A catalogue item as sent by a client; not persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

/// The body is wrapped under an `item` key.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddedItem {
    pub item: CatalogItem,
}

pub async fn body_parameter(
    JsonBody(body): JsonBody<EmbeddedItem>,
) -> Result<Json<EmbeddedItem>, AppError> {
    if body.item.price <= 0.0 {
        return Err(AppError::Validation("price must be greater than 0".into()));
    }
    Ok(Json(body))
}

#[derive(Serialize)]
pub struct UserAgentBody {
    pub user_agent: Option<String>,
}

pub async fn header_example(UserAgent(user_agent): UserAgent) -> Json<UserAgentBody> {
    Json(UserAgentBody { user_agent })
}

#[derive(Serialize)]
pub struct SessionTokenBody {
    pub session_token: Option<String>,
}

pub async fn cookie_example(SessionToken(session_token): SessionToken) -> Json<SessionTokenBody> {
    Json(SessionTokenBody { session_token })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn query_example_defaults() {
        let q = parse_query_example(&params(&[("data_type", "files")])).unwrap();
        assert_eq!(
            q,
            QueryExample {
                data_type: "files".into(),
                skip: 0,
                limit: 10
            }
        );
    }

    #[test]
    fn query_example_bounds() {
        assert!(parse_query_example(&params(&[])).is_err());
        assert!(parse_query_example(&params(&[("data_type", "x"), ("skip", "-1")])).is_err());
        assert!(parse_query_example(&params(&[("data_type", "x"), ("limit", "101")])).is_err());
        assert!(parse_query_example(&params(&[("data_type", "x"), ("limit", "100")])).is_ok());
    }
}
