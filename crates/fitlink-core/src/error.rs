//! Unified application error types for Fitlink.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The API crate turns an `AppError`
//! into an HTTP response based on its [`ErrorKind`].

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found (or is hidden from the caller).
    NotFound,
    /// Authentication failed (missing token, revoked session, bad credentials).
    Authentication,
    /// The caller does not have permission to perform the action.
    Authorization,
    /// Input validation failed; `details` carries field-level messages.
    Validation,
    /// A business rule rejected the request ("already own a gym", illegal transition).
    BusinessRule,
    /// A uniqueness conflict, such as a booking slot that is already taken.
    Conflict,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The requested operation is not implemented.
    NotImplemented,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::BusinessRule => write!(f, "BUSINESS_RULE"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::NotImplemented => write!(f, "NOT_IMPLEMENTED"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout Fitlink.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Structured extras merged into the response body
    /// (field errors, required/actual role).
    pub details: Option<Value>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach structured details to this error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error without field details.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a validation error attached to a single field.
    ///
    /// The response body becomes `{message, errors: {field: [message]}}`.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.clone()]);
        Self::new(ErrorKind::Validation, message).with_details(serde_json::json!({
            "errors": errors,
        }))
    }

    /// Create a business-rule error.
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BusinessRule, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a not-implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message)
    }

    /// Whether this error was caused by the client rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotFound
                | ErrorKind::Authentication
                | ErrorKind::Authorization
                | ErrorKind::Validation
                | ErrorKind::BusinessRule
                | ErrorKind::Conflict
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field is invalid ({}).", e.code),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        let message = fields
            .values()
            .flat_map(|messages| messages.first())
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        Self::new(ErrorKind::Validation, message).with_details(serde_json::json!({
            "errors": fields,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(length(min = 1, message = "The name field is required."))]
        name: String,
        #[validate(email(message = "The email must be a valid email address."))]
        email: String,
    }

    #[test]
    fn test_field_error_carries_errors_map() {
        let err = AppError::field("email", "The email has already been taken.");
        assert_eq!(err.kind, ErrorKind::Validation);
        let details = err.details.unwrap();
        assert_eq!(
            details["errors"]["email"][0],
            "The email has already been taken."
        );
    }

    #[test]
    fn test_validation_errors_conversion() {
        let input = Signup {
            name: String::new(),
            email: "not-an-email".to_string(),
        };
        let err: AppError = input.validate().unwrap_err().into();

        assert_eq!(err.kind, ErrorKind::Validation);
        let details = err.details.unwrap();
        assert_eq!(details["errors"]["name"][0], "The name field is required.");
        assert_eq!(
            details["errors"]["email"][0],
            "The email must be a valid email address."
        );
        // BTreeMap ordering makes the summary message deterministic.
        assert_eq!(err.message, "The email must be a valid email address.");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::conflict("slot taken").is_client_error());
        assert!(AppError::business_rule("nope").is_client_error());
        assert!(!AppError::internal("boom").is_client_error());
        assert!(!AppError::database("down").is_client_error());
    }

    #[test]
    fn test_clone_keeps_details_and_drops_source() {
        let io = std::io::Error::other("disk");
        let err = AppError::with_source(ErrorKind::Internal, "wrapped", io)
            .with_details(serde_json::json!({"hint": 1}));
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.details, err.details);
    }
}
