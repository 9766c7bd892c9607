//! Role gate applied to route groups.
//!
//! The gate authenticates first (401 `Unauthenticated.`), then checks the
//! caller's live role against the group's required role (403 echoing both).
//! The resolved [`AuthUser`] is stashed in request extensions so handlers do
//! not authenticate twice.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use fitlink_auth::RoleGuard;
use fitlink_entity::user::UserRole;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// State for one gated route group.
#[derive(Debug, Clone)]
pub struct RoleGate {
    pub state: AppState,
    pub required: UserRole,
}

impl RoleGate {
    pub fn new(state: &AppState, required: UserRole) -> Self {
        Self {
            state: state.clone(),
            required,
        }
    }
}

/// Admit the request iff the caller's role is the required one or admin.
pub async fn require_role(
    State(gate): State<RoleGate>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();
    let user = AuthUser::authenticate(&mut parts, &gate.state).await?;

    if let Err(err) = RoleGuard::check(user.role, gate.required) {
        tracing::debug!(
            user_id = %user.user_id,
            user_role = %user.role.as_str(),
            required_role = %gate.required.as_str(),
            "Role gate denied request"
        );
        return Err(err.into());
    }

    parts.extensions.insert(user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}
