//! Owner and admin operations on gyms.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_database::repositories::dashboard::GymAnalytics;
use fitlink_database::repositories::{
    DashboardRepository, GymRepository, InstructorRepository, SubscriptionRepository,
};
use fitlink_entity::gym::{CreateGym, Gym, GymStatus, UpdateGym};
use fitlink_entity::instructor::Instructor;

use crate::context::RequestContext;

/// A gym as its owner sees it: every instructor, whatever their state.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedGym {
    #[serde(flatten)]
    pub gym: Gym,
    pub instructors: Vec<Instructor>,
}

#[derive(Debug, Clone)]
pub struct GymService {
    gym_repo: Arc<GymRepository>,
    instructor_repo: Arc<InstructorRepository>,
    subscription_repo: Arc<SubscriptionRepository>,
    dashboard_repo: Arc<DashboardRepository>,
}

impl GymService {
    pub fn new(
        gym_repo: Arc<GymRepository>,
        instructor_repo: Arc<InstructorRepository>,
        subscription_repo: Arc<SubscriptionRepository>,
        dashboard_repo: Arc<DashboardRepository>,
    ) -> Self {
        Self {
            gym_repo,
            instructor_repo,
            subscription_repo,
            dashboard_repo,
        }
    }

    /// Register the caller's gym. An owner has at most one.
    pub async fn create(&self, ctx: &RequestContext, mut data: CreateGym) -> Result<Gym, AppError> {
        if self.gym_repo.exists_for_owner(ctx.user_id).await? {
            return Err(AppError::business_rule("You already have a gym registered"));
        }

        data.owner_id = ctx.user_id;
        let gym = self.gym_repo.create(&data).await?;
        info!(gym_id = %gym.id, owner_id = %ctx.user_id, "Gym created");
        Ok(gym)
    }

    /// Apply an owner edit. Touching name, address, or phone sends the gym
    /// back for approval.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        gym_id: Uuid,
        data: UpdateGym,
    ) -> Result<Gym, AppError> {
        let gym = self.find(gym_id).await?;
        if !gym.is_owned_by(ctx.user_id) {
            return Err(AppError::authorization(
                "Access denied. You can only update your own gym.",
            ));
        }

        let status = if data.requires_reapproval() && gym.status != GymStatus::Pending {
            gym.status.transition_to(GymStatus::Pending)?
        } else {
            gym.status
        };

        let updated = self.gym_repo.update(gym.id, &data, status).await?;
        info!(
            gym_id = %gym.id,
            from = %gym.status,
            to = %updated.status,
            "Gym updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, ctx: &RequestContext, gym_id: Uuid) -> Result<(), AppError> {
        let gym = self.find(gym_id).await?;
        if !gym.is_owned_by(ctx.user_id) {
            return Err(AppError::authorization(
                "Access denied. You can only delete your own gym.",
            ));
        }
        if self.subscription_repo.count_active_for_gym(gym.id).await? > 0 {
            return Err(AppError::business_rule(
                "Cannot delete gym with active subscriptions",
            ));
        }

        self.gym_repo.delete(gym.id).await?;
        info!(gym_id = %gym.id, owner_id = %ctx.user_id, "Gym deleted");
        Ok(())
    }

    pub async fn my_gyms(&self, ctx: &RequestContext) -> Result<Vec<OwnedGym>, AppError> {
        let gyms = self.gym_repo.list_by_owner(ctx.user_id).await?;
        let mut owned = Vec::with_capacity(gyms.len());
        for gym in gyms {
            let instructors = self.instructor_repo.list_by_gym(gym.id).await?;
            owned.push(OwnedGym { gym, instructors });
        }
        Ok(owned)
    }

    pub async fn analytics(
        &self,
        ctx: &RequestContext,
        gym_id: Uuid,
    ) -> Result<GymAnalytics, AppError> {
        let gym = self.find(gym_id).await?;
        if !gym.is_owned_by(ctx.user_id) && !ctx.is_admin() {
            return Err(AppError::authorization(
                "Access denied. You can only view your own gym.",
            ));
        }
        self.dashboard_repo.gym_analytics(gym.id, ctx.today()).await
    }

    /// Admin moderation: approve, reject, suspend, or send back to pending.
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        gym_id: Uuid,
        next: GymStatus,
    ) -> Result<Gym, AppError> {
        let gym = self.find(gym_id).await?;
        let status = gym.status.transition_to(next)?;
        let updated = self.gym_repo.set_status(gym.id, status).await?;
        info!(
            gym_id = %gym.id,
            admin_id = %ctx.user_id,
            from = %gym.status,
            to = %status,
            "Gym status changed"
        );
        Ok(updated)
    }

    /// Admin verification. The only path to `is_verified = true`.
    pub async fn set_verified(
        &self,
        ctx: &RequestContext,
        gym_id: Uuid,
        verified: bool,
    ) -> Result<Gym, AppError> {
        let gym = self.find(gym_id).await?;
        let updated = self.gym_repo.set_verified(gym.id, verified).await?;
        info!(gym_id = %gym.id, admin_id = %ctx.user_id, verified, "Gym verification set");
        Ok(updated)
    }

    async fn find(&self, gym_id: Uuid) -> Result<Gym, AppError> {
        self.gym_repo
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found"))
    }
}
