//! Gym application review queue.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{ApplicationQuery, ReviewRequest};
use crate::dto::response::{ApiResult, envelope, paginated};
use crate::extractors::{AuthUser, OptionalJson, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /v1/admin/gym-applications
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ApplicationQuery>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult {
    let page = params.into_page_request(&state.config.discovery);
    let applications = state.application_service.list(query.status, page).await?;
    paginated(
        "Applications retrieved successfully",
        "applications",
        applications,
    )
}

/// GET /v1/admin/gym-applications/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let application = state.application_service.get(id).await?;
    Ok(envelope(
        "Application retrieved successfully",
        json!({ "application": application }),
    ))
}

/// PUT /v1/admin/gym-applications/{id}/review
pub async fn review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let application = state.application_service.start_review(&auth, id).await?;
    Ok(envelope(
        "Application moved to review",
        json!({ "application": application }),
    ))
}

/// PUT /v1/admin/gym-applications/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReviewRequest>,
) -> ApiResult {
    let application = state
        .application_service
        .approve(&auth, id, req.admin_notes)
        .await?;
    Ok(envelope(
        "Application approved successfully",
        json!({ "application": application }),
    ))
}

/// PUT /v1/admin/gym-applications/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReviewRequest>,
) -> ApiResult {
    let application = state
        .application_service
        .reject(&auth, id, req.rejection_reason, req.admin_notes)
        .await?;
    Ok(envelope(
        "Application rejected",
        json!({ "application": application }),
    ))
}

/// PUT /v1/admin/gym-applications/{id}/require-changes
pub async fn require_changes(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<ReviewRequest>,
) -> ApiResult {
    let application = state
        .application_service
        .require_changes(&auth, id, req.admin_notes)
        .await?;
    Ok(envelope(
        "Changes requested from applicant",
        json!({ "application": application }),
    ))
}
