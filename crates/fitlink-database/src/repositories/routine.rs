//! Routine repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::routine::{BodyRegion, CreateRoutine, Difficulty, Routine, Weekday};

use super::db_err;

/// Filters for routine listings. Only active routines are ever listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutineFilter {
    pub body_region: Option<BodyRegion>,
    pub difficulty: Option<Difficulty>,
    /// Scheduled on this day.
    pub day: Option<Weekday>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub created_by: Option<Uuid>,
}

impl RoutineFilter {
    fn query(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT * FROM routines WHERE is_active = TRUE");
        if let Some(region) = self.body_region {
            qb.push(" AND body_region = ").push_bind(region);
        }
        if let Some(difficulty) = self.difficulty {
            qb.push(" AND difficulty = ").push_bind(difficulty);
        }
        if let Some(day) = self.day {
            qb.push(" AND schedule_days @> ")
                .push_bind(serde_json::json!([day.as_str()]))
                .push("::jsonb");
        }
        if let Some(min) = self.min_duration {
            qb.push(" AND estimated_duration >= ").push_bind(min);
        }
        if let Some(max) = self.max_duration {
            qb.push(" AND estimated_duration <= ").push_bind(max);
        }
        if let Some(creator) = self.created_by {
            qb.push(" AND created_by = ").push_bind(creator);
        }
        qb.push(" ORDER BY name");
        qb
    }
}

#[derive(Debug, Clone)]
pub struct RoutineRepository {
    pool: PgPool,
}

impl RoutineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<Routine>> {
        sqlx::query_as::<_, Routine>("SELECT * FROM routines WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find routine"))
    }

    pub async fn list(&self, filter: RoutineFilter) -> AppResult<Vec<Routine>> {
        filter
            .query()
            .build_query_as::<Routine>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list routines"))
    }

    pub async fn create(&self, data: &CreateRoutine) -> AppResult<Routine> {
        sqlx::query_as::<_, Routine>(
            "INSERT INTO routines (name, description, body_region, difficulty, \
                estimated_duration, exercises, equipment_needed, target_muscles, video_url, \
                thumbnail, schedule_days, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.body_region)
        .bind(data.difficulty)
        .bind(data.estimated_duration)
        .bind(sqlx::types::Json(&data.exercises))
        .bind(sqlx::types::Json(&data.equipment_needed))
        .bind(sqlx::types::Json(&data.target_muscles))
        .bind(&data.video_url)
        .bind(&data.thumbnail)
        .bind(sqlx::types::Json(&data.schedule_days))
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create routine"))
    }
}
