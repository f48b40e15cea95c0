//! Extract the User-Agent header from the request.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::USER_AGENT, request::Parts},
};

/// Extractor for the optional `User-Agent` header. Blank values count as absent.
#[derive(Clone, Debug)]
pub struct UserAgent(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for UserAgent
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(UserAgent(value))
    }
}
