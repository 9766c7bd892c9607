//! Gym handlers: public discovery and owner management.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{CreateGymRequest, GymSearchParams, UpdateGymRequest};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope, message, paginated};
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/gyms
pub async fn list_gyms(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<GymSearchParams>,
) -> ApiResult {
    let page = state.discovery_service.search(params.into()).await?;
    paginated("Gyms retrieved successfully", "gyms", page)
}

/// GET /v1/gyms/{id}
pub async fn get_gym(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let gym = state.discovery_service.show(id).await?;
    Ok(envelope("Gym retrieved successfully", json!({ "gym": gym })))
}

/// GET /v1/gyms/{id}/instructors
pub async fn gym_instructors(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let instructors = state.discovery_service.instructors(id).await?;
    Ok(envelope(
        "Instructors retrieved successfully",
        json!({ "instructors": instructors }),
    ))
}

/// POST /v1/gyms
pub async fn create_gym(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateGymRequest>,
) -> CreatedResult {
    let gym = state.gym_service.create(&auth, req.into()).await?;
    Ok(created(
        "Gym created successfully and pending approval",
        json!({ "gym": gym }),
    ))
}

/// PUT /v1/gyms/{id}
pub async fn update_gym(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateGymRequest>,
) -> ApiResult {
    let gym = state.gym_service.update(&auth, id, req.into()).await?;
    Ok(envelope("Gym updated successfully", json!({ "gym": gym })))
}

/// DELETE /v1/gyms/{id}
pub async fn delete_gym(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    state.gym_service.delete(&auth, id).await?;
    Ok(message("Gym deleted successfully"))
}

/// GET /v1/my-gyms
pub async fn my_gyms(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let gyms = state.gym_service.my_gyms(&auth).await?;
    Ok(envelope("Gyms retrieved successfully", json!({ "gyms": gyms })))
}

/// GET /v1/my-gyms/{id}/analytics
pub async fn gym_analytics(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let analytics = state.gym_service.analytics(&auth, id).await?;
    Ok(envelope(
        "Analytics retrieved successfully",
        json!({ "analytics": analytics }),
    ))
}
