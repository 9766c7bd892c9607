//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitlink_entity::user::UserRole;

/// Who is acting, and from which session.
///
/// Built by the API's authentication extractor after the bearer token and
/// its session row have been validated. `role` is read from the user row,
/// so a role change takes effect without re-issuing the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub role: UserRole,
    pub email: String,
    /// Client IP, when the transport exposes one.
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(
        user_id: Uuid,
        session_id: Uuid,
        role: UserRole,
        email: String,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            session_id,
            role,
            email,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_privileged()
    }

    /// The request date, used for every "today" comparison.
    pub fn today(&self) -> chrono::NaiveDate {
        self.request_time.date_naive()
    }
}
