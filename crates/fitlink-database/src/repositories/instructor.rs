//! Instructor repository.

use sqlx::PgPool;
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::instructor::{CreateInstructor, Instructor, UpdateInstructor};

use super::db_err;

#[derive(Debug, Clone)]
pub struct InstructorRepository {
    pool: PgPool,
}

impl InstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Instructor>> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find instructor"))
    }

    /// The instructor profile linked to a trainer account.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Instructor>> {
        sqlx::query_as::<_, Instructor>(
            "SELECT * FROM instructors WHERE user_id = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find instructor profile"))
    }

    pub async fn list_by_gym(&self, gym_id: Uuid) -> AppResult<Vec<Instructor>> {
        sqlx::query_as::<_, Instructor>(
            "SELECT * FROM instructors WHERE gym_id = $1 ORDER BY name",
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list instructors"))
    }

    /// Instructors members may book, best rated first.
    pub async fn list_bookable_by_gym(&self, gym_id: Uuid) -> AppResult<Vec<Instructor>> {
        sqlx::query_as::<_, Instructor>(
            "SELECT * FROM instructors \
             WHERE gym_id = $1 AND status = 'active' AND is_available = TRUE \
             ORDER BY rating DESC, name",
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list instructors"))
    }

    /// Every instructor at any gym the user owns.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Instructor>> {
        sqlx::query_as::<_, Instructor>(
            "SELECT i.* FROM instructors i \
             JOIN gyms g ON g.id = i.gym_id \
             WHERE g.owner_id = $1 \
             ORDER BY i.name",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list owner instructors"))
    }

    pub async fn create(&self, data: &CreateInstructor) -> AppResult<Instructor> {
        sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (gym_id, user_id, name, email, phone, bio, specialization, \
                years_experience, certifications, profile_picture, hourly_rate, \
                availability_schedule) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(data.gym_id)
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.bio)
        .bind(&data.specialization)
        .bind(data.years_experience)
        .bind(sqlx::types::Json(&data.certifications))
        .bind(&data.profile_picture)
        .bind(data.hourly_rate)
        .bind(&data.availability_schedule)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create instructor"))
    }

    /// Apply an update; absent fields keep their value.
    pub async fn update(&self, id: Uuid, data: &UpdateInstructor) -> AppResult<Instructor> {
        sqlx::query_as::<_, Instructor>(
            "UPDATE instructors SET \
                user_id = COALESCE($2, user_id), \
                name = COALESCE($3, name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                bio = COALESCE($6, bio), \
                specialization = COALESCE($7, specialization), \
                years_experience = COALESCE($8, years_experience), \
                certifications = COALESCE($9, certifications), \
                profile_picture = COALESCE($10, profile_picture), \
                hourly_rate = COALESCE($11, hourly_rate), \
                availability_schedule = COALESCE($12, availability_schedule), \
                is_available = COALESCE($13, is_available), \
                status = COALESCE($14, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.bio)
        .bind(&data.specialization)
        .bind(data.years_experience)
        .bind(data.certifications.as_ref().map(sqlx::types::Json))
        .bind(&data.profile_picture)
        .bind(data.hourly_rate)
        .bind(&data.availability_schedule)
        .bind(data.is_available)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update instructor"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete instructor"))?;
        Ok(())
    }
}
