//! Chat handlers.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{CreateChatRequest, SendMessageRequest};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope, paginated};
use crate::extractors::{AuthUser, PaginationParams, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/chats
pub async fn list_chats(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let chats = state.chat_service.list(&auth).await?;
    Ok(envelope("Chats retrieved successfully", json!({ "chats": chats })))
}

/// POST /v1/chats
pub async fn create_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateChatRequest>,
) -> CreatedResult {
    let chat = state.chat_service.create(&auth, req.into()).await?;
    Ok(created("Chat created successfully", json!({ "chat": chat })))
}

/// GET /v1/chats/{id}
pub async fn get_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let chat = state.chat_service.get(&auth, id).await?;
    Ok(envelope("Chat retrieved successfully", json!({ "chat": chat })))
}

/// GET /v1/chats/{id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult {
    let page = params.into_page_request(&state.config.discovery);
    let messages = state.chat_service.messages(&auth, id, page).await?;
    paginated("Messages retrieved successfully", "messages", messages)
}

/// POST /v1/chats/{id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> CreatedResult {
    let message = state
        .chat_service
        .send(&auth, req.into_message(id))
        .await?;
    Ok(created("Message sent successfully", json!({ "chat_message": message })))
}

/// PUT /v1/chats/{id}/read
pub async fn mark_chat_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let marked = state.chat_service.mark_read(&auth, id).await?;
    Ok(envelope("Messages marked as read", json!({ "marked": marked })))
}
