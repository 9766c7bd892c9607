//! # fitlink-api
//!
//! HTTP API layer for Fitlink built on Axum.
//!
//! Provides every `/v1` REST endpoint, middleware (role gates, CORS,
//! request logging), extractors, DTOs, and the `AppError` to HTTP mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
