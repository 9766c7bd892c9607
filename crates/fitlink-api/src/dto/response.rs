//! Response envelope.
//!
//! Every success body is `{message, ...data}`: a human-readable message
//! plus the payload keys at the top level.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use fitlink_core::types::PageResponse;

use crate::error::ApiError;

/// Result type for JSON handlers.
pub type ApiResult = Result<Json<Value>, ApiError>;

/// Result type for handlers that create a resource.
pub type CreatedResult = Result<(StatusCode, Json<Value>), ApiError>;

/// Build a `{message, ...data}` body. Non-object payloads are ignored.
pub fn envelope(message: &str, data: Value) -> Json<Value> {
    let mut body = Map::new();
    body.insert("message".into(), Value::String(message.to_string()));
    if let Value::Object(fields) = data {
        body.extend(fields);
    }
    Json(Value::Object(body))
}

/// A message-only body.
pub fn message(message: &str) -> Json<Value> {
    envelope(message, Value::Null)
}

/// A 201 response with the given body.
pub fn created(message: &str, data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, envelope(message, data))
}

/// `{message, <key>: items, pagination}` for a page of results.
pub fn paginated<T: Serialize>(
    message: &str,
    key: &str,
    page: PageResponse<T>,
) -> ApiResult {
    let pagination = serde_json::to_value(page.meta())?;
    let mut data = Map::new();
    data.insert(key.to_string(), serde_json::to_value(&page.items)?);
    data.insert("pagination".into(), pagination);
    Ok(envelope(message, Value::Object(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_flattens_payload() {
        let Json(body) = envelope("Gym retrieved successfully", json!({"gym": {"id": 1}}));
        assert_eq!(
            body,
            json!({"message": "Gym retrieved successfully", "gym": {"id": 1}})
        );
    }

    #[test]
    fn test_paginated_shape() {
        let page = PageResponse::new(vec![1, 2], 2, 2, 5);
        let Json(body) = paginated("Gyms retrieved successfully", "gyms", page).unwrap();
        assert_eq!(body["gyms"], json!([1, 2]));
        assert_eq!(body["pagination"]["current_page"], 2);
        assert_eq!(body["pagination"]["last_page"], 3);
        assert_eq!(body["pagination"]["per_page"], 2);
        assert_eq!(body["pagination"]["total"], 5);
    }

    #[test]
    fn test_message_only() {
        let Json(body) = message("Logged out successfully");
        assert_eq!(body, json!({"message": "Logged out successfully"}));
    }
}
