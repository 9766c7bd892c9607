//! Device token repository.

use sqlx::PgPool;
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::device::{DeviceToken, RegisterDevice};

use super::db_err;

#[derive(Debug, Clone)]
pub struct DeviceTokenRepository {
    pool: PgPool,
}

impl DeviceTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a token, moving it to this user and reactivating it if it
    /// already exists.
    pub async fn upsert(&self, data: &RegisterDevice) -> AppResult<DeviceToken> {
        sqlx::query_as::<_, DeviceToken>(
            "INSERT INTO device_tokens (user_id, device_token, platform, device_id, \
                device_model, os_version, app_version, is_active, last_used_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, NOW()) \
             ON CONFLICT (device_token) DO UPDATE SET \
                user_id = EXCLUDED.user_id, \
                platform = EXCLUDED.platform, \
                device_id = COALESCE(EXCLUDED.device_id, device_tokens.device_id), \
                device_model = COALESCE(EXCLUDED.device_model, device_tokens.device_model), \
                os_version = COALESCE(EXCLUDED.os_version, device_tokens.os_version), \
                app_version = COALESCE(EXCLUDED.app_version, device_tokens.app_version), \
                is_active = TRUE, \
                last_used_at = NOW(), \
                updated_at = NOW() \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.device_token)
        .bind(data.platform)
        .bind(&data.device_id)
        .bind(&data.device_model)
        .bind(&data.os_version)
        .bind(&data.app_version)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to register device token"))
    }

    /// Deactivate a token owned by `user_id`. Returns false if it is not theirs.
    pub async fn deactivate(&self, user_id: Uuid, device_token: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE device_tokens SET is_active = FALSE, updated_at = NOW() \
             WHERE user_id = $1 AND device_token = $2",
        )
        .bind(user_id)
        .bind(device_token)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to deactivate device token"))?;
        Ok(result.rows_affected() > 0)
    }
}
