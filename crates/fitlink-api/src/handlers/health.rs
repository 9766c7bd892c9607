//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use fitlink_database::DatabasePool;

use crate::state::AppState;

/// GET /v1/health
///
/// 200 when the database answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = DatabasePool::from_pool(state.db_pool.clone())
        .health_check()
        .await;

    let (status, database) = match database {
        Ok(true) => (StatusCode::OK, "connected"),
        Ok(false) | Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };

    (
        status,
        Json(json!({
            "message": if status.is_success() { "Service healthy" } else { "Service degraded" },
            "status": if status.is_success() { "ok" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
            "timestamp": chrono::Utc::now(),
        })),
    )
}
