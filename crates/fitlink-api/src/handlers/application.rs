//! Gym application handlers for applicants.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::GymApplicationRequest;
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /v1/gym-applications
pub async fn submit_application(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<GymApplicationRequest>,
) -> CreatedResult {
    let application = state.application_service.submit(&auth, req.into()).await?;
    Ok(created(
        "Gym application submitted successfully",
        json!({ "application": application }),
    ))
}

/// GET /v1/gym-applications/my-application
pub async fn my_application(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let application = state.application_service.my_application(&auth).await?;
    Ok(envelope(
        "Application retrieved successfully",
        json!({ "application": application }),
    ))
}

/// PUT /v1/gym-applications/{id}/resubmit
pub async fn resubmit_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<GymApplicationRequest>,
) -> ApiResult {
    let application = state
        .application_service
        .resubmit(&auth, id, req.into())
        .await?;
    Ok(envelope(
        "Application resubmitted successfully",
        json!({ "application": application }),
    ))
}
