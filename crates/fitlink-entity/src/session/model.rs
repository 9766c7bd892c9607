//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One issued bearer token.
///
/// A session is created on register, login, and refresh. Revoking a token
/// sets `revoked_at`; the JWT itself stays cryptographically valid, so every
/// authenticated request checks the session row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (the JWT `sid` claim).
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 hex digest of the issued token.
    pub token_hash: String,
    /// IP address from which the session was created.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// Last authenticated request.
    pub last_activity: DateTime<Utc>,
    /// When the session was revoked.
    pub revoked_at: Option<DateTime<Utc>>,
    /// Why the session was revoked ("logout", "refresh", "password_change").
    pub revoked_reason: Option<String>,
}

impl Session {
    /// Check whether the session is still usable at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }

    /// Check whether the session is still usable.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// Pre-allocated session id embedded in the token.
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_in: Duration, revoked: bool) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "abc".into(),
            ip_address: None,
            user_agent: None,
            created_at: now,
            expires_at: now + expires_in,
            last_activity: now,
            revoked_at: revoked.then_some(now),
            revoked_reason: revoked.then(|| "logout".to_string()),
        }
    }

    #[test]
    fn test_active_session() {
        assert!(session(Duration::hours(1), false).is_active());
    }

    #[test]
    fn test_revoked_or_expired_session_is_inactive() {
        assert!(!session(Duration::hours(1), true).is_active());
        assert!(!session(Duration::hours(-1), false).is_active());
    }
}
