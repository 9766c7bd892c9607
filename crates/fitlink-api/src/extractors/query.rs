//! Query-string extractor whose rejections render as 422 validation errors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use fitlink_core::error::AppError;

use crate::error::ApiError;

/// Like `axum::extract::Query`, but an unparsable filter (an unknown
/// status, a malformed date) becomes a 422 `ApiError` instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryParams(value))
            .map_err(|rejection| AppError::validation(rejection.body_text()).into())
    }
}
