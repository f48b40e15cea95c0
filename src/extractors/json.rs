//! JSON body extractor whose schema rejections render as 422 validation errors.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

/// Like `Json<T>`, but malformed, mistyped or missing fields become `AppError::Validation`.
/// Failures reading the body itself (e.g. over the size limit) keep axum's response.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::MissingJsonContentType(_) => {
                    AppError::Validation(rejection.body_text()).into_response()
                }
                other => other.into_response(),
            }),
        }
    }
}
