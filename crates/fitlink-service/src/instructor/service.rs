//! Instructor CRUD scoped to the owner's gym, plus trainer self-service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_database::repositories::{GymRepository, InstructorRepository, UserRepository};
use fitlink_entity::instructor::{CreateInstructor, Instructor, UpdateInstructor};
use fitlink_entity::user::UserRole;

use crate::context::RequestContext;

/// Fields a trainer may change on their own instructor profile.
#[derive(Debug, Clone, Default)]
pub struct TrainerProfileUpdate {
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub availability_schedule: Option<serde_json::Value>,
    pub is_available: Option<bool>,
    pub hourly_rate: Option<Decimal>,
}

impl From<TrainerProfileUpdate> for UpdateInstructor {
    fn from(update: TrainerProfileUpdate) -> Self {
        Self {
            bio: update.bio,
            specialization: update.specialization,
            availability_schedule: update.availability_schedule,
            is_available: update.is_available,
            hourly_rate: update.hourly_rate,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct InstructorService {
    instructor_repo: Arc<InstructorRepository>,
    gym_repo: Arc<GymRepository>,
    user_repo: Arc<UserRepository>,
}

impl InstructorService {
    pub fn new(
        instructor_repo: Arc<InstructorRepository>,
        gym_repo: Arc<GymRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            instructor_repo,
            gym_repo,
            user_repo,
        }
    }

    /// Add an instructor to the caller's gym.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateInstructor,
    ) -> Result<Instructor, AppError> {
        let gym = self
            .gym_repo
            .list_by_owner(ctx.user_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::business_rule("You must register a gym before adding instructors")
            })?;

        if let Some(user_id) = data.user_id {
            self.ensure_trainer(user_id).await?;
        }

        data.gym_id = gym.id;
        let instructor = self.instructor_repo.create(&data).await?;
        info!(instructor_id = %instructor.id, gym_id = %gym.id, "Instructor created");
        Ok(instructor)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        instructor_id: Uuid,
        mut data: UpdateInstructor,
    ) -> Result<Instructor, AppError> {
        let instructor = self.find_owned(ctx, instructor_id).await?;

        if let Some(user_id) = data.user_id {
            self.ensure_trainer(user_id).await?;
        }

        data.status = match data.status {
            Some(next) if next != instructor.status => {
                Some(instructor.status.transition_to(next)?)
            }
            _ => None,
        };

        let updated = self.instructor_repo.update(instructor.id, &data).await?;
        info!(instructor_id = %instructor.id, status = %updated.status, "Instructor updated");
        Ok(updated)
    }

    pub async fn delete(&self, ctx: &RequestContext, instructor_id: Uuid) -> Result<(), AppError> {
        let instructor = self.find_owned(ctx, instructor_id).await?;
        self.instructor_repo.delete(instructor.id).await?;
        info!(instructor_id = %instructor.id, owner_id = %ctx.user_id, "Instructor deleted");
        Ok(())
    }

    /// Instructors across every gym the caller owns.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Instructor>, AppError> {
        self.instructor_repo.list_by_owner(ctx.user_id).await
    }

    /// The instructor profile linked to the calling trainer.
    pub async fn trainer_profile(&self, ctx: &RequestContext) -> Result<Instructor, AppError> {
        self.instructor_repo
            .find_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor profile not found"))
    }

    pub async fn update_trainer_profile(
        &self,
        ctx: &RequestContext,
        update: TrainerProfileUpdate,
    ) -> Result<Instructor, AppError> {
        let profile = self.trainer_profile(ctx).await?;
        let updated = self
            .instructor_repo
            .update(profile.id, &update.into())
            .await?;
        info!(instructor_id = %profile.id, user_id = %ctx.user_id, "Trainer profile updated");
        Ok(updated)
    }

    async fn find_owned(
        &self,
        ctx: &RequestContext,
        instructor_id: Uuid,
    ) -> Result<Instructor, AppError> {
        let instructor = self
            .instructor_repo
            .find_by_id(instructor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor not found"))?;

        let owns_gym = self
            .gym_repo
            .find_by_id(instructor.gym_id)
            .await?
            .is_some_and(|gym| gym.is_owned_by(ctx.user_id));
        if !owns_gym && !ctx.is_admin() {
            return Err(AppError::authorization(
                "Access denied. You can only manage instructors of your own gym.",
            ));
        }
        Ok(instructor)
    }

    async fn ensure_trainer(&self, user_id: Uuid) -> Result<(), AppError> {
        match self.user_repo.find_by_id(user_id).await? {
            Some(user) if user.role == UserRole::Trainer => Ok(()),
            Some(_) => Err(AppError::field(
                "user_id",
                "The linked user must have the trainer role.",
            )),
            None => Err(AppError::field("user_id", "The selected user id is invalid.")),
        }
    }
}
