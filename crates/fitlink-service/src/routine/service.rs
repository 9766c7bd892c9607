//! Routine browsing and trainer authoring.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_database::repositories::{RoutineFilter, RoutineRepository};
use fitlink_entity::routine::{CreateRoutine, Routine};

use crate::context::RequestContext;

#[derive(Debug, Clone)]
pub struct RoutineService {
    routine_repo: Arc<RoutineRepository>,
}

impl RoutineService {
    pub fn new(routine_repo: Arc<RoutineRepository>) -> Self {
        Self { routine_repo }
    }

    pub async fn list(&self, filter: RoutineFilter) -> Result<Vec<Routine>, AppError> {
        if let (Some(min), Some(max)) = (filter.min_duration, filter.max_duration) {
            if min > max {
                return Err(AppError::field(
                    "max_duration",
                    "The max duration must be greater than or equal to the min duration.",
                ));
            }
        }
        self.routine_repo.list(filter).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Routine, AppError> {
        self.routine_repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Routine not found"))
    }

    /// Routines authored by the calling trainer.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Routine>, AppError> {
        self.routine_repo
            .list(RoutineFilter {
                created_by: Some(ctx.user_id),
                ..Default::default()
            })
            .await
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateRoutine,
    ) -> Result<Routine, AppError> {
        if data.exercises.is_empty() {
            return Err(AppError::field(
                "exercises",
                "The exercises field must contain at least one exercise.",
            ));
        }

        data.created_by = ctx.user_id;
        let routine = self.routine_repo.create(&data).await?;
        info!(routine_id = %routine.id, trainer_id = %ctx.user_id, "Routine created");
        Ok(routine)
    }
}
