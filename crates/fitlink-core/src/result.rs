//! Convenience result alias.

use crate::error::AppError;

/// Result type used throughout Fitlink.
pub type AppResult<T> = Result<T, AppError>;
