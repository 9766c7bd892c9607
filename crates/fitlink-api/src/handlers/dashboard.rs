//! Role dashboards for members, trainers and gym owners.

use axum::extract::State;
use serde_json::json;

use crate::dto::request::{RoutineQuery, SubscriptionQuery};
use crate::dto::response::{ApiResult, envelope, paginated};
use crate::extractors::{AuthUser, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /v1/member/subscription
pub async fn member_subscription(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let subscriptions = state.subscription_service.current(&auth).await?;
    Ok(envelope(
        "Active subscriptions retrieved successfully",
        json!({ "subscriptions": subscriptions }),
    ))
}

/// GET /v1/member/workouts
pub async fn member_workouts(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<RoutineQuery>,
) -> ApiResult {
    let routines = state.routine_service.list(query.into()).await?;
    Ok(envelope(
        "Workouts retrieved successfully",
        json!({ "workouts": routines }),
    ))
}

/// GET /v1/member/progress
pub async fn member_progress(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let progress = state.dashboard_service.member_progress(&auth).await?;
    Ok(envelope(
        "Progress retrieved successfully",
        json!({ "progress": progress }),
    ))
}

/// GET /v1/trainer/clients
pub async fn trainer_clients(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let clients = state.dashboard_service.trainer_clients(&auth).await?;
    Ok(envelope(
        "Clients retrieved successfully",
        json!({ "clients": clients }),
    ))
}

/// GET /v1/gym-owner/members
pub async fn gym_members(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let members = state.dashboard_service.gym_members(&auth).await?;
    Ok(envelope(
        "Members retrieved successfully",
        json!({ "members": members }),
    ))
}

/// GET /v1/gym-owner/revenue
pub async fn gym_revenue(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let revenue = state.dashboard_service.gym_revenue(&auth).await?;
    Ok(envelope(
        "Revenue retrieved successfully",
        json!({ "revenue": revenue }),
    ))
}

/// GET /v1/gym-owner/subscriptions
pub async fn gym_subscriptions(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SubscriptionQuery>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult {
    let gym = state.dashboard_service.owned_gym(&auth).await?;
    let page = params.into_page_request(&state.config.discovery);
    let subscriptions = state
        .subscription_service
        .list_for_gym(gym.id, query.status, page)
        .await?;
    paginated(
        "Subscriptions retrieved successfully",
        "subscriptions",
        subscriptions,
    )
}
