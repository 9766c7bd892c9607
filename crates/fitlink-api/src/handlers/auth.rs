//! Auth handlers: registration, login, tokens, profile, devices.

use axum::extract::{Path, State};
use serde_json::json;

use fitlink_core::error::AppError;

use crate::dto::request::{
    ChangePasswordRequest, DeviceTokenRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest,
};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope, message};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ClientInfo, ValidatedJson};
use crate::state::AppState;

/// POST /v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    client: ClientInfo,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> CreatedResult {
    let outcome = state
        .auth_service
        .register(req.into_input()?, client.ip_address, client.user_agent)
        .await?;
    Ok(created("User registered successfully", serde_json::to_value(outcome)?))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    client: ClientInfo,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult {
    let outcome = state
        .auth_service
        .login(req.into_input()?, client.ip_address, client.user_agent)
        .await?;
    Ok(envelope("Login successful", serde_json::to_value(outcome)?))
}

/// POST /v1/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    state.auth_service.logout(&auth).await?;
    Ok(message("Logged out successfully"))
}

/// POST /v1/auth/refresh
pub async fn refresh(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let outcome = state.auth_service.refresh(&auth).await?;
    Ok(envelope("Token refreshed successfully", serde_json::to_value(outcome)?))
}

/// GET /v1/auth/profile
pub async fn profile(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let user = state.auth_service.profile(&auth).await?;
    Ok(envelope("Profile retrieved successfully", json!({ "user": user })))
}

/// PUT /v1/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult {
    let user = state.auth_service.update_profile(&auth, req.into()).await?;
    Ok(envelope("Profile updated successfully", json!({ "user": user })))
}

/// PUT /v1/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult {
    state
        .auth_service
        .change_password(
            &auth,
            &req.current_password,
            &req.new_password,
            &req.new_password_confirmation,
        )
        .await?;
    Ok(message(
        "Password changed successfully. Please log in again.",
    ))
}

/// POST /v1/auth/device-token
pub async fn register_device(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<DeviceTokenRequest>,
) -> ApiResult {
    let device = state.auth_service.register_device(&auth, req.into()).await?;
    Ok(envelope(
        "Device token registered successfully",
        json!({ "device_token": device }),
    ))
}

/// DELETE /v1/auth/device-token/{token}
pub async fn remove_device(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
) -> ApiResult {
    state.auth_service.remove_device(&auth, &token).await?;
    Ok(message("Device token removed successfully"))
}

/// POST /v1/auth/forgot-password
///
/// No mail transport exists, so this refuses rather than pretending a
/// reset link was sent.
pub async fn forgot_password() -> Result<(), ApiError> {
    Err(AppError::not_implemented(
        "Password reset by email is not available yet. Contact support to recover your account.",
    )
    .into())
}

/// POST /v1/auth/reset-password
pub async fn reset_password() -> Result<(), ApiError> {
    Err(AppError::not_implemented(
        "Password reset by email is not available yet. Contact support to recover your account.",
    )
    .into())
}
