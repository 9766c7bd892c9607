//! Platform analytics.

use axum::extract::State;
use serde_json::json;

use crate::dto::response::{ApiResult, envelope};
use crate::state::AppState;

/// GET /v1/admin/analytics/overview
pub async fn overview(State(state): State<AppState>) -> ApiResult {
    let overview = state.dashboard_service.admin_overview().await?;
    Ok(envelope(
        "Overview retrieved successfully",
        json!({ "overview": overview }),
    ))
}

/// GET /v1/admin/analytics/fraud-trends
pub async fn fraud_trends(State(state): State<AppState>) -> ApiResult {
    let trends = state.dashboard_service.fraud_trends().await?;
    Ok(envelope(
        "Fraud trends retrieved successfully",
        json!({ "trends": trends }),
    ))
}
