//! `AuthUser` extractor: validates the bearer token and its session, then
//! loads the user's current role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use fitlink_auth::jwt::decoder::UNAUTHENTICATED;
use fitlink_core::error::AppError;
use fitlink_service::context::RequestContext;

use crate::error::ApiError;
use crate::extractors::client::ClientInfo;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }

    /// Resolve the caller from the request head.
    ///
    /// The role comes from the user row, not the token, so demotions take
    /// effect immediately.
    pub async fn authenticate(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::authentication(UNAUTHENTICATED))?;

        let claims = state.session_manager.authenticate(bearer.token()).await?;

        let user = state
            .auth_service
            .find_user(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication(UNAUTHENTICATED))?;

        let client = ClientInfo::from_headers(&parts.headers);

        Ok(AuthUser(RequestContext::new(
            user.id,
            claims.session_id(),
            user.role,
            user.email,
            client.ip_address,
            client.user_agent,
        )))
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A role gate upstream has already resolved the caller.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        Ok(Self::authenticate(parts, state).await?)
    }
}
