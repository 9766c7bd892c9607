//! Notification log repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_entity::notification::{
    CreateNotification, NotificationLog, NotificationStatus, NotificationType,
};

use super::db_err;

/// Optional filters for a user's notification list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationFilter {
    pub status: Option<NotificationStatus>,
    pub notification_type: Option<NotificationType>,
}

impl NotificationFilter {
    fn push(&self, qb: &mut QueryBuilder<'static, Postgres>, user_id: Uuid) {
        qb.push(" WHERE user_id = ").push_bind(user_id);
        if let Some(status) = self.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(kind) = self.notification_type {
            qb.push(" AND type = ").push_bind(kind);
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<NotificationLog>> {
        sqlx::query_as::<_, NotificationLog>("SELECT * FROM notification_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find notification"))
    }

    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        filter: NotificationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<NotificationLog>> {
        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM notification_logs");
        filter.push(&mut count, user_id);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count notifications"))?;

        let mut select = QueryBuilder::new("SELECT * FROM notification_logs");
        filter.push(&mut select, user_id);
        select
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let items = select
            .build_query_as::<NotificationLog>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list notifications"))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// Notifications that are sent or delivered but not yet read.
    pub async fn unread_count(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notification_logs \
             WHERE user_id = $1 AND status IN ('sent', 'delivered')",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to count unread notifications"))
    }

    /// Insert a notification in its initial status.
    pub async fn create(
        &self,
        data: &CreateNotification,
        status: NotificationStatus,
    ) -> AppResult<NotificationLog> {
        sqlx::query_as::<_, NotificationLog>(
            "INSERT INTO notification_logs (user_id, type, title, body, data, channel, status, \
                sent_at, delivered_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, \
                CASE WHEN $7 IN ('sent'::notification_status, 'delivered'::notification_status) \
                    THEN NOW() END, \
                CASE WHEN $7 = 'delivered'::notification_status THEN NOW() END) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.notification_type)
        .bind(&data.title)
        .bind(&data.body)
        .bind(&data.data)
        .bind(data.channel)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create notification"))
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<NotificationLog> {
        sqlx::query_as::<_, NotificationLog>(
            "UPDATE notification_logs SET status = 'read', read_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to mark notification read"))
    }

    /// Mark every sent or delivered notification of the user as read.
    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notification_logs SET status = 'read', read_at = NOW(), updated_at = NOW() \
             WHERE user_id = $1 AND status IN ('sent', 'delivered')",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to mark notifications read"))?;
        Ok(result.rows_affected())
    }
}
