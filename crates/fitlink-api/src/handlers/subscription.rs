//! Subscription handlers for the caller's own memberships.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{RenewRequest, SubscribeRequest, SubscriptionQuery};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::extractors::{AuthUser, OptionalJson, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SubscriptionQuery>,
) -> ApiResult {
    let subscriptions = state.subscription_service.list(&auth, query.status).await?;
    Ok(envelope(
        "Subscriptions retrieved successfully",
        json!({ "subscriptions": subscriptions }),
    ))
}

/// GET /v1/subscriptions/{id}
pub async fn get_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let subscription = state.subscription_service.get(&auth, id).await?;
    Ok(envelope(
        "Subscription retrieved successfully",
        json!({ "subscription": subscription }),
    ))
}

/// POST /v1/subscriptions
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SubscribeRequest>,
) -> CreatedResult {
    let subscription = state.subscription_service.subscribe(&auth, req.into()).await?;
    Ok(created(
        "Subscription created successfully",
        json!({ "subscription": subscription }),
    ))
}

/// PUT /v1/subscriptions/{id}/cancel
pub async fn cancel_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let subscription = state.subscription_service.cancel(&auth, id).await?;
    Ok(envelope(
        "Subscription cancelled successfully",
        json!({ "subscription": subscription }),
    ))
}

/// PUT /v1/subscriptions/{id}/renew
pub async fn renew_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<RenewRequest>,
) -> ApiResult {
    let subscription = state
        .subscription_service
        .renew(&auth, id, req.plan_type)
        .await?;
    Ok(envelope(
        "Subscription renewed successfully",
        json!({ "subscription": subscription }),
    ))
}
