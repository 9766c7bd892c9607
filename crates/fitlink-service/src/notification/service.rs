//! Notification reads and the internal notify hook used by workflows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_core::types::{PageRequest, PageResponse};
use fitlink_database::repositories::{NotificationFilter, NotificationRepository};
use fitlink_entity::notification::{CreateNotification, NotificationLog, NotificationStatus};

use crate::context::RequestContext;

#[derive(Debug, Clone)]
pub struct NotificationService {
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: NotificationFilter,
        page: PageRequest,
    ) -> Result<PageResponse<NotificationLog>, AppError> {
        self.notification_repo
            .list_by_user(ctx.user_id, filter, &page)
            .await
    }

    /// A notification addressed to the caller; anyone else's reads as missing.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<NotificationLog, AppError> {
        self.notification_repo
            .find_by_id(id)
            .await?
            .filter(|n| n.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notification_repo.unread_count(ctx.user_id).await
    }

    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<NotificationLog, AppError> {
        let notification = self.get(ctx, id).await?;
        notification.status.transition_to(NotificationStatus::Read)?;
        self.notification_repo.mark_read(id).await
    }

    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let updated = self.notification_repo.mark_all_read(ctx.user_id).await?;
        info!(user_id = %ctx.user_id, updated, "Notifications marked read");
        Ok(updated)
    }

    /// Record a notification for `data.user_id`.
    ///
    /// Workflow steps call this after their own write has landed. A failure
    /// here is logged and swallowed so it never undoes the workflow.
    pub async fn notify(&self, data: CreateNotification) {
        let status = NotificationStatus::initial_for(data.channel);
        match self.notification_repo.create(&data, status).await {
            Ok(log) => info!(
                user_id = %log.user_id,
                notification_id = %log.id,
                kind = %log.notification_type,
                "Notification recorded"
            ),
            Err(e) => warn!(
                user_id = %data.user_id,
                kind = %data.notification_type,
                error = %e,
                "Failed to record notification"
            ),
        }
    }
}
