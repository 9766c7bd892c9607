//! Application submission by members and review by admins.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_core::types::{PageRequest, PageResponse};
use fitlink_database::repositories::{ApplicationReview, GymApplicationRepository, GymRepository};
use fitlink_entity::gym::GymStatus;
use fitlink_entity::gym_application::{ApplicationStatus, CreateGymApplication, GymApplication};
use fitlink_entity::notification::{CreateNotification, NotificationType};

use crate::context::RequestContext;
use crate::notification::NotificationService;

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AppError::field(field, format!("The {} field is required.", field.replace('_', " ")))
        })
}

#[derive(Debug, Clone)]
pub struct GymApplicationService {
    application_repo: Arc<GymApplicationRepository>,
    gym_repo: Arc<GymRepository>,
    notifications: Arc<NotificationService>,
}

impl GymApplicationService {
    pub fn new(
        application_repo: Arc<GymApplicationRepository>,
        gym_repo: Arc<GymRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            application_repo,
            gym_repo,
            notifications,
        }
    }

    pub async fn submit(
        &self,
        ctx: &RequestContext,
        mut data: CreateGymApplication,
    ) -> Result<GymApplication, AppError> {
        if self.application_repo.has_open_for_user(ctx.user_id).await? {
            return Err(AppError::business_rule(
                "You already have a pending gym application",
            ));
        }

        data.user_id = ctx.user_id;
        let application = self.application_repo.create(&data).await?;
        info!(application_id = %application.id, user_id = %ctx.user_id, "Gym application submitted");
        Ok(application)
    }

    pub async fn my_application(&self, ctx: &RequestContext) -> Result<GymApplication, AppError> {
        self.application_repo
            .find_latest_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("No gym application found"))
    }

    pub async fn resubmit(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        mut data: CreateGymApplication,
    ) -> Result<GymApplication, AppError> {
        let application = self
            .find(id)
            .await?
            .filter(|a| a.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("Gym application not found"))?;
        let status = application.status.transition_to(ApplicationStatus::Pending)?;

        data.user_id = ctx.user_id;
        let resubmitted = self.application_repo.resubmit(id, &data, status).await?;
        info!(application_id = %id, user_id = %ctx.user_id, "Gym application resubmitted");
        Ok(resubmitted)
    }

    pub async fn list(
        &self,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<GymApplication>, AppError> {
        self.application_repo.list(status, &page).await
    }

    pub async fn get(&self, id: Uuid) -> Result<GymApplication, AppError> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym application not found"))
    }

    pub async fn start_review(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<GymApplication, AppError> {
        self.decide(ctx, id, ApplicationStatus::UnderReview, None, None)
            .await
    }

    /// Approve, and move the applicant's pending gyms to approved.
    ///
    /// Verification stays a separate admin step, so approved gyms remain
    /// hidden from discovery until verified.
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        admin_notes: Option<String>,
    ) -> Result<GymApplication, AppError> {
        let application = self
            .decide(ctx, id, ApplicationStatus::Approved, admin_notes, None)
            .await?;

        for gym in self.gym_repo.list_by_owner(application.user_id).await? {
            if gym.status != GymStatus::Pending {
                continue;
            }
            let status = gym.status.transition_to(GymStatus::Approved)?;
            self.gym_repo.set_status(gym.id, status).await?;
            info!(gym_id = %gym.id, application_id = %id, "Gym approved with application");
        }

        self.notify(
            &application,
            "Gym application approved",
            format!(
                "Your application for {} has been approved.",
                application.business_name
            ),
        )
        .await;
        Ok(application)
    }

    pub async fn reject(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        rejection_reason: Option<String>,
        admin_notes: Option<String>,
    ) -> Result<GymApplication, AppError> {
        let reason = required("rejection_reason", rejection_reason)?;
        let application = self
            .decide(
                ctx,
                id,
                ApplicationStatus::Rejected,
                admin_notes,
                Some(reason.clone()),
            )
            .await?;

        self.notify(
            &application,
            "Gym application rejected",
            format!("Your application was rejected: {reason}"),
        )
        .await;
        Ok(application)
    }

    pub async fn require_changes(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        admin_notes: Option<String>,
    ) -> Result<GymApplication, AppError> {
        let notes = required("admin_notes", admin_notes)?;
        let application = self
            .decide(
                ctx,
                id,
                ApplicationStatus::RequiresChanges,
                Some(notes.clone()),
                None,
            )
            .await?;

        self.notify(
            &application,
            "Changes requested on your gym application",
            notes,
        )
        .await;
        Ok(application)
    }

    async fn decide(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: ApplicationStatus,
        admin_notes: Option<String>,
        rejection_reason: Option<String>,
    ) -> Result<GymApplication, AppError> {
        let application = self.get(id).await?;
        let status = application.status.transition_to(next)?;

        let reviewed = self
            .application_repo
            .record_review(
                id,
                &ApplicationReview {
                    status,
                    reviewed_by: ctx.user_id,
                    admin_notes,
                    rejection_reason,
                },
            )
            .await?;

        info!(
            application_id = %id,
            admin_id = %ctx.user_id,
            from = %application.status,
            to = %status,
            "Gym application reviewed"
        );
        Ok(reviewed)
    }

    async fn find(&self, id: Uuid) -> Result<Option<GymApplication>, AppError> {
        self.application_repo.find_by_id(id).await
    }

    async fn notify(&self, application: &GymApplication, title: &str, body: String) {
        self.notifications
            .notify(
                CreateNotification::in_app(
                    application.user_id,
                    NotificationType::GymApproval,
                    title,
                    body,
                )
                .with_data(json!({
                    "application_id": application.id,
                    "status": application.status,
                })),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_names_field() {
        assert_eq!(required("admin_notes", Some("  fix docs ".into())).unwrap(), "fix docs");

        let err = required("rejection_reason", Some("   ".into())).unwrap_err();
        assert_eq!(err.message, "The rejection reason field is required.");
        assert_eq!(
            err.details.unwrap()["errors"]["rejection_reason"][0],
            "The rejection reason field is required."
        );
        assert!(required("admin_notes", None).is_err());
    }
}
