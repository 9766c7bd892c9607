//! Gym application repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_entity::gym_application::{ApplicationStatus, CreateGymApplication, GymApplication};

use super::db_err;

/// An admin decision recorded on the application row.
#[derive(Debug, Clone)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    pub reviewed_by: Uuid,
    pub admin_notes: Option<String>,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GymApplicationRepository {
    pool: PgPool,
}

impl GymApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GymApplication>> {
        sqlx::query_as::<_, GymApplication>("SELECT * FROM gym_applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find gym application"))
    }

    /// The applicant's most recent application.
    pub async fn find_latest_by_user(&self, user_id: Uuid) -> AppResult<Option<GymApplication>> {
        sqlx::query_as::<_, GymApplication>(
            "SELECT * FROM gym_applications WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find gym application"))
    }

    /// Whether the user has an application that is pending or under review.
    pub async fn has_open_for_user(&self, user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM gym_applications \
             WHERE user_id = $1 AND status IN ('pending', 'under_review'))",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check open applications"))
    }

    pub async fn list(
        &self,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<GymApplication>> {
        let filter = |qb: &mut QueryBuilder<'static, Postgres>| {
            if let Some(status) = status {
                qb.push(" WHERE status = ").push_bind(status);
            }
        };

        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM gym_applications");
        filter(&mut count);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count gym applications"))?;

        let mut select = QueryBuilder::new("SELECT * FROM gym_applications");
        filter(&mut select);
        select
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let items = select
            .build_query_as::<GymApplication>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list gym applications"))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    pub async fn create(&self, data: &CreateGymApplication) -> AppResult<GymApplication> {
        sqlx::query_as::<_, GymApplication>(
            "INSERT INTO gym_applications (user_id, business_name, business_description, \
                business_address, business_city, business_state, business_country, \
                business_phone, business_email, business_website, \
                business_registration_number, tax_identification_number, \
                documents, licenses, operating_hours, amenities) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.business_name)
        .bind(&data.business_description)
        .bind(&data.business_address)
        .bind(&data.business_city)
        .bind(&data.business_state)
        .bind(&data.business_country)
        .bind(&data.business_phone)
        .bind(&data.business_email)
        .bind(&data.business_website)
        .bind(&data.business_registration_number)
        .bind(&data.tax_identification_number)
        .bind(sqlx::types::Json(&data.documents))
        .bind(sqlx::types::Json(&data.licenses))
        .bind(&data.operating_hours)
        .bind(sqlx::types::Json(&data.amenities))
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create gym application"))
    }

    /// Replace the business fields and put the application back in `status`.
    pub async fn resubmit(
        &self,
        id: Uuid,
        data: &CreateGymApplication,
        status: ApplicationStatus,
    ) -> AppResult<GymApplication> {
        sqlx::query_as::<_, GymApplication>(
            "UPDATE gym_applications SET \
                business_name = $2, business_description = $3, business_address = $4, \
                business_city = $5, business_state = $6, business_country = $7, \
                business_phone = $8, business_email = $9, business_website = $10, \
                business_registration_number = $11, tax_identification_number = $12, \
                documents = $13, licenses = $14, operating_hours = $15, amenities = $16, \
                status = $17, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.business_name)
        .bind(&data.business_description)
        .bind(&data.business_address)
        .bind(&data.business_city)
        .bind(&data.business_state)
        .bind(&data.business_country)
        .bind(&data.business_phone)
        .bind(&data.business_email)
        .bind(&data.business_website)
        .bind(&data.business_registration_number)
        .bind(&data.tax_identification_number)
        .bind(sqlx::types::Json(&data.documents))
        .bind(sqlx::types::Json(&data.licenses))
        .bind(&data.operating_hours)
        .bind(sqlx::types::Json(&data.amenities))
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to resubmit gym application"))
    }

    /// Record a review decision, stamping the acting admin and time.
    ///
    /// `approved_at`/`rejected_at` are stamped when the new status is the
    /// matching outcome. Notes and reasons only overwrite when provided.
    pub async fn record_review(
        &self,
        id: Uuid,
        review: &ApplicationReview,
    ) -> AppResult<GymApplication> {
        sqlx::query_as::<_, GymApplication>(
            "UPDATE gym_applications SET \
                status = $2, \
                reviewed_by = $3, \
                reviewed_at = NOW(), \
                admin_notes = COALESCE($4, admin_notes), \
                rejection_reason = COALESCE($5, rejection_reason), \
                approved_at = CASE WHEN $2 = 'approved'::application_status \
                    THEN NOW() ELSE approved_at END, \
                rejected_at = CASE WHEN $2 = 'rejected'::application_status \
                    THEN NOW() ELSE rejected_at END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(review.status)
        .bind(review.reviewed_by)
        .bind(&review.admin_notes)
        .bind(&review.rejection_reason)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to record application review"))
    }
}
