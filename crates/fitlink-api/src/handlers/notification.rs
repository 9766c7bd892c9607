//! Notification handlers.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::NotificationQuery;
use crate::dto::response::{ApiResult, envelope, paginated};
use crate::extractors::{AuthUser, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<NotificationQuery>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult {
    let page = params.into_page_request(&state.config.discovery);
    let result = state
        .notification_service
        .list(&auth, query.into(), page)
        .await?;
    paginated("Notifications retrieved successfully", "notifications", result)
}

/// GET /v1/notifications/unread-count
pub async fn unread_count(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(envelope(
        "Unread count retrieved successfully",
        json!({ "unread_count": count }),
    ))
}

/// GET /v1/notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let notification = state.notification_service.get(&auth, id).await?;
    Ok(envelope(
        "Notification retrieved successfully",
        json!({ "notification": notification }),
    ))
}

/// PUT /v1/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let notification = state.notification_service.mark_read(&auth, id).await?;
    Ok(envelope(
        "Notification marked as read",
        json!({ "notification": notification }),
    ))
}

/// PUT /v1/notifications/read-all
pub async fn mark_all_read(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let marked = state.notification_service.mark_all_read(&auth).await?;
    Ok(envelope(
        "All notifications marked as read",
        json!({ "marked": marked }),
    ))
}
