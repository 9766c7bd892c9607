//! Routine handlers: the public catalogue and trainer authoring.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{CreateRoutineRequest, RoutineQuery};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/routines
pub async fn list_routines(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RoutineQuery>,
) -> ApiResult {
    let routines = state.routine_service.list(query.into()).await?;
    Ok(envelope(
        "Routines retrieved successfully",
        json!({ "routines": routines }),
    ))
}

/// GET /v1/routines/{id}
pub async fn get_routine(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let routine = state.routine_service.get(id).await?;
    Ok(envelope("Routine retrieved successfully", json!({ "routine": routine })))
}

/// GET /v1/trainer/routines
pub async fn my_routines(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let routines = state.routine_service.list_mine(&auth).await?;
    Ok(envelope(
        "Routines retrieved successfully",
        json!({ "routines": routines }),
    ))
}

/// POST /v1/trainer/routines
pub async fn create_routine(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateRoutineRequest>,
) -> CreatedResult {
    let routine = state.routine_service.create(&auth, req.into()).await?;
    Ok(created("Routine created successfully", json!({ "routine": routine })))
}
