//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::result::AppResult;
use fitlink_entity::user::{CreateUser, UpdateProfile, User};

use super::{db_err, violated_constraint};

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find user by id"))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find user by email"))
    }

    /// Load several users at once, in no particular order.
    pub async fn find_many(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to load users"))
    }

    /// Insert a new user. A duplicate email becomes a field error.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, phone, location) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.phone)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("users_email_key") => {
                AppError::field("email", "The email has already been taken.")
            }
            _ => db_err("Failed to create user")(e),
        })
    }

    /// Apply a profile update; absent fields keep their value.
    pub async fn update_profile(&self, id: Uuid, data: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                phone = COALESCE($3, phone), \
                location = COALESCE($4, location), \
                profile_picture = COALESCE($5, profile_picture), \
                date_of_birth = COALESCE($6, date_of_birth), \
                gender = COALESCE($7, gender), \
                bio = COALESCE($8, bio), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(&data.profile_picture)
        .bind(data.date_of_birth)
        .bind(data.gender)
        .bind(&data.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update profile"))
    }

    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to update password"))?;
        Ok(())
    }

    /// Stamp `last_active_at` with the current time.
    pub async fn touch_last_active(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_active_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to update last activity"))?;
        Ok(())
    }
}
