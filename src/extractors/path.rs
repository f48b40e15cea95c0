//! Path extractor whose deserialization failures render as 422 validation errors.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Like `Path<T>`, but segments that fail to decode (e.g. invalid UTF-8) become `AppError::Validation`.
/// A route without the expected parameters keeps axum's response.
#[derive(Clone, Debug)]
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                Err(AppError::Validation(e.body_text()).into_response())
            }
            Err(other) => Err(other.into_response()),
        }
    }
}
