//! Fraud report investigation.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use fitlink_entity::fraud::FraudStatus;

use crate::dto::request::{AssignReportRequest, FraudReportQuery, ReportNotesRequest};
use crate::dto::response::{ApiResult, envelope, paginated};
use crate::extractors::{AuthUser, OptionalJson, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /v1/admin/fraud-reports
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FraudReportQuery>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult {
    let page = params.into_page_request(&state.config.discovery);
    let reports = state.fraud_service.list(query.into(), page).await?;
    paginated("Reports retrieved successfully", "reports", reports)
}

/// GET /v1/admin/fraud-reports/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let report = state.fraud_service.get(id).await?;
    Ok(envelope("Report retrieved successfully", json!({ "report": report })))
}

/// PUT /v1/admin/fraud-reports/{id}/assign
pub async fn assign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<AssignReportRequest>,
) -> ApiResult {
    let report = state.fraud_service.assign(&auth, id, req.admin_id).await?;
    Ok(envelope("Report assigned successfully", json!({ "report": report })))
}

/// PUT /v1/admin/fraud-reports/{id}/investigate
pub async fn investigate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReportNotesRequest>,
) -> ApiResult {
    let report = state.fraud_service.investigate(&auth, id, req.notes).await?;
    Ok(envelope("Investigation started", json!({ "report": report })))
}

async fn close(
    state: AppState,
    auth: AuthUser,
    id: Uuid,
    outcome: FraudStatus,
    notes: Option<String>,
    done: &str,
) -> ApiResult {
    let report = state.fraud_service.close(&auth, id, outcome, notes).await?;
    Ok(envelope(done, json!({ "report": report })))
}

/// PUT /v1/admin/fraud-reports/{id}/resolve
pub async fn resolve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReportNotesRequest>,
) -> ApiResult {
    close(state, auth, id, FraudStatus::Resolved, req.notes, "Report resolved").await
}

/// PUT /v1/admin/fraud-reports/{id}/dismiss
pub async fn dismiss(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReportNotesRequest>,
) -> ApiResult {
    close(state, auth, id, FraudStatus::Dismissed, req.notes, "Report dismissed").await
}

/// PUT /v1/admin/fraud-reports/{id}/escalate
pub async fn escalate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReportNotesRequest>,
) -> ApiResult {
    close(state, auth, id, FraudStatus::Escalated, req.notes, "Report escalated").await
}
