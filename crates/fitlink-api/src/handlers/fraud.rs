//! Fraud report handlers for reporters.

use axum::extract::State;
use serde_json::json;

use crate::dto::request::FraudReportRequest;
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /v1/fraud-reports
pub async fn submit_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FraudReportRequest>,
) -> CreatedResult {
    let report = state.fraud_service.submit(&auth, req.into()).await?;
    Ok(created(
        "Fraud report submitted successfully",
        json!({ "report": report }),
    ))
}

/// GET /v1/fraud-reports/my-reports
pub async fn my_reports(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let reports = state.fraud_service.my_reports(&auth).await?;
    Ok(envelope(
        "Reports retrieved successfully",
        json!({ "reports": reports }),
    ))
}
