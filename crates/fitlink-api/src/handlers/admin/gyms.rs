//! Gym moderation.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{GymStatusRequest, VerifyGymRequest};
use crate::dto::response::{ApiResult, envelope};
use crate::extractors::{AuthUser, OptionalJson, ValidatedJson};
use crate::state::AppState;

/// PUT /v1/admin/gyms/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<GymStatusRequest>,
) -> ApiResult {
    let gym = state.gym_service.set_status(&auth, id, req.status).await?;
    Ok(envelope("Gym status updated successfully", json!({ "gym": gym })))
}

/// PUT /v1/admin/gyms/{id}/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<VerifyGymRequest>,
) -> ApiResult {
    let gym = state
        .gym_service
        .set_verified(&auth, id, req.is_verified)
        .await?;
    let message = if gym.is_verified {
        "Gym verified successfully"
    } else {
        "Gym verification revoked"
    };
    Ok(envelope(message, json!({ "gym": gym })))
}
