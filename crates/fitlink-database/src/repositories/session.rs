//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::session::{CreateSession, Session};

use super::db_err;

/// Repository for issued bearer-token sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find session"))
    }

    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, token_hash, ip_address, user_agent, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.id)
        .bind(data.user_id)
        .bind(&data.token_hash)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create session"))
    }

    pub async fn touch(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_activity = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to update session activity"))?;
        Ok(())
    }

    /// Revoke a single session. Already-revoked rows keep their first reason.
    pub async fn revoke(&self, id: Uuid, reason: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW(), revoked_reason = $2 \
             WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to revoke session"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke every live session of a user, returning how many were revoked.
    pub async fn revoke_all_for_user(&self, user_id: Uuid, reason: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW(), revoked_reason = $2 \
             WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to revoke user sessions"))?;
        Ok(result.rows_affected())
    }
}
