//! JSON body extractor that runs `validator` rules before the handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use serde::de::DeserializeOwned;
use validator::Validate;

use fitlink_core::error::AppError;

use crate::error::ApiError;

/// Deserializes a JSON body and validates it.
///
/// Malformed JSON, wrong field types and rule violations all become 422
/// responses with the usual `{message, errors}` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;
        value.validate().map_err(AppError::from)?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::validation("Expected request with `Content-Type: application/json`")
        }
        other => AppError::validation(other.body_text()),
    }
}

/// A JSON body that may be omitted entirely.
///
/// `PUT /bookings/{id}/cancel` and friends accept an empty request; when a
/// body is present it is parsed and validated like [`ValidatedJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalJson<T>(pub T);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(T::default()));
        }

        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::validation(format!("Failed to parse the request body as JSON: {e}")))?;
        value.validate().map_err(AppError::from)?;
        Ok(OptionalJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, Validate)]
    struct Reason {
        #[validate(length(max = 10, message = "The reason may not be greater than 10 characters."))]
        reason: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("PUT")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_body_uses_default() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let OptionalJson(reason) = OptionalJson::<Reason>::from_request(req, &()).await.unwrap();
        assert!(reason.reason.is_none());
    }

    #[tokio::test]
    async fn test_present_body_is_validated() {
        let err = OptionalJson::<Reason>::from_request(
            json_request(r#"{"reason":"far too long a reason"}"#),
            &(),
        )
        .await
        .unwrap_err();
        let ApiError(err) = err;
        assert_eq!(err.kind, fitlink_core::error::ErrorKind::Validation);
        assert!(err.details.unwrap()["errors"]["reason"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_validation_error() {
        let err = ValidatedJson::<Reason>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.0.kind, fitlink_core::error::ErrorKind::Validation);
    }
}
