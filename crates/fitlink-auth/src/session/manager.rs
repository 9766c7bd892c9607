//! Token issuance, authentication, and revocation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use fitlink_core::config::AuthConfig;
use fitlink_core::error::AppError;
use fitlink_entity::user::User;

use super::store::SessionStore;
use crate::jwt::decoder::UNAUTHENTICATED;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};

/// A freshly issued bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub token_type: &'static str,
    #[serde(skip)]
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Ties JWTs to session rows so a token can be revoked before it expires.
#[derive(Debug, Clone)]
pub struct SessionManager {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    store: SessionStore,
}

impl SessionManager {
    pub fn new(config: &AuthConfig, store: SessionStore) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            store,
        }
    }

    pub async fn issue(
        &self,
        user: &User,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<IssuedToken, AppError> {
        let session_id = Uuid::new_v4();
        let (token, expires_at) =
            self.encoder
                .encode(user.id, session_id, user.role, &user.email)?;

        self.store
            .save(session_id, user.id, &token, ip_address, user_agent, expires_at)
            .await?;

        info!(user_id = %user.id, session_id = %session_id, "Session created");

        Ok(IssuedToken {
            token,
            token_type: "Bearer",
            session_id,
            expires_at,
        })
    }

    /// Validate a presented token against its session row.
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decoder.decode(token)?;

        if self.store.find_live(claims.sid, token).await?.is_none() {
            debug!(session_id = %claims.sid, "Token presented for a dead session");
            return Err(AppError::authentication(UNAUTHENTICATED));
        }

        self.store.touch(claims.sid).await?;
        Ok(claims)
    }

    pub async fn logout(&self, user_id: Uuid, session_id: Uuid) -> Result<(), AppError> {
        self.store.revoke(session_id, "logout").await?;
        info!(user_id = %user_id, session_id = %session_id, "Session revoked on logout");
        Ok(())
    }

    /// Revoke every session of the user, then issue a single new token.
    pub async fn refresh(
        &self,
        user: &User,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<IssuedToken, AppError> {
        let revoked = self.store.revoke_all(user.id, "refresh").await?;
        info!(user_id = %user.id, revoked, "Sessions revoked for refresh");
        self.issue(user, ip_address, user_agent).await
    }

    pub async fn revoke_all(&self, user_id: Uuid, reason: &str) -> Result<u64, AppError> {
        let revoked = self.store.revoke_all(user_id, reason).await?;
        info!(user_id = %user_id, revoked, reason, "All sessions revoked");
        Ok(revoked)
    }
}
