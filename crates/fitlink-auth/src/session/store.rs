//! Session persistence.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_database::repositories::SessionRepository;
use fitlink_entity::session::{CreateSession, Session};

/// Hex SHA-256 of a bearer token. Only the digest is stored.
pub fn token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    repo: SessionRepository,
}

impl SessionStore {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn save(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        token: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError> {
        self.repo
            .create(&CreateSession {
                id: session_id,
                user_id,
                token_hash: token_digest(token),
                ip_address,
                user_agent,
                expires_at,
            })
            .await
    }

    /// The session for `session_id`, if it exists, is live, and was issued for `token`.
    pub async fn find_live(&self, session_id: Uuid, token: &str) -> Result<Option<Session>, AppError> {
        let session = self.repo.find_by_id(session_id).await?;
        Ok(session.filter(|s| s.is_active() && s.token_hash == token_digest(token)))
    }

    pub async fn touch(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.touch(session_id).await
    }

    pub async fn revoke(&self, session_id: Uuid, reason: &str) -> Result<bool, AppError> {
        self.repo.revoke(session_id, reason).await
    }

    pub async fn revoke_all(&self, user_id: Uuid, reason: &str) -> Result<u64, AppError> {
        self.repo.revoke_all_for_user(user_id, reason).await
    }
}
