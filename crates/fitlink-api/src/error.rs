//! Maps domain `AppError` to HTTP responses through the local [`ApiError`]
//! wrapper.
//!
//! Every error body carries a `message`. Structured `details` (field
//! errors, required and actual role) are merged into the top level.
//! Server-side failures never leak their message; they are logged here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use fitlink_core::error::{AppError, ErrorKind};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BusinessRule => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP-facing error returned by handlers, extractors and middleware.
///
/// `?` on any `AppResult` converts into it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);
        let mut body = Map::new();

        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Request failed"
            );
            let message = if status == StatusCode::SERVICE_UNAVAILABLE {
                err.message
            } else {
                INTERNAL_MESSAGE.to_string()
            };
            body.insert("message".into(), Value::String(message));
            return (status, Json(Value::Object(body))).into_response();
        }

        body.insert("message".into(), Value::String(err.message));
        if let Some(Value::Object(details)) = err.details {
            for (key, value) in details {
                if key != "message" {
                    body.insert(key, value);
                }
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_field_error_renders_422_with_errors() {
        let (status, body) = render(AppError::field(
            "email",
            "The provided credentials are incorrect.",
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "The provided credentials are incorrect.");
        assert_eq!(
            body["errors"]["email"][0],
            "The provided credentials are incorrect."
        );
    }

    #[tokio::test]
    async fn test_question_mark_converts_domain_errors_in_handlers() {
        use axum::Router;
        use axum::body::Body;
        use axum::http::Request;
        use axum::routing::get;
        use fitlink_core::result::AppResult;
        use tower::ServiceExt;

        fn lookup() -> AppResult<Value> {
            Err(AppError::not_found("Gym not found"))
        }

        async fn handler() -> Result<Json<Value>, ApiError> {
            Ok(Json(lookup()?))
        }

        let response = Router::new()
            .route("/", get(handler))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "Gym not found"}));
    }

    #[tokio::test]
    async fn test_role_denial_echoes_roles() {
        let err = AppError::authorization("Access denied. Insufficient permissions.")
            .with_details(json!({"required_role": "admin", "user_role": "member"}));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["required_role"], "admin");
        assert_eq!(body["user_role"], "member");
    }

    #[tokio::test]
    async fn test_database_error_is_masked() {
        let (status, body) = render(AppError::database("relation \"gyms\" does not exist")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_client_kinds_map_to_expected_statuses() {
        let cases = [
            (AppError::authentication("Unauthenticated."), 401),
            (AppError::not_found("Gym not found"), 404),
            (AppError::business_rule("You already have a gym registered"), 400),
            (AppError::conflict("This time slot is already booked"), 409),
            (AppError::not_implemented("later"), 501),
        ];
        for (err, expected) in cases {
            let message = err.message.clone();
            let (status, body) = render(err).await;
            assert_eq!(status.as_u16(), expected);
            assert_eq!(body["message"], message);
        }
    }
}
