//! Booking repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::result::AppResult;
use fitlink_entity::booking::{
    Booking, BookingPaymentStatus, BookingStatus, CreateBooking, SLOT_CONSTRAINT,
};

use super::{db_err, violated_constraint};

#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find booking"))
    }

    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>> {
        self.list_where("user_id", user_id, status).await
    }

    pub async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>> {
        self.list_where("instructor_id", instructor_id, status).await
    }

    async fn list_where(
        &self,
        column: &'static str,
        id: Uuid,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM bookings WHERE ");
        qb.push(column).push(" = ").push_bind(id);
        if let Some(status) = status {
            qb.push(" AND status = ").push_bind(status);
        }
        qb.push(" ORDER BY booking_date DESC, start_time DESC");
        qb.build_query_as::<Booking>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list bookings"))
    }

    /// Insert a booking. Taking a live slot twice is a 409 conflict.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, instructor_id, gym_id, booking_date, start_time, \
                end_time, duration_minutes, amount, currency, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.instructor_id)
        .bind(data.gym_id)
        .bind(data.booking_date)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.duration_minutes)
        .bind(data.amount)
        .bind(&data.currency)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some(SLOT_CONSTRAINT) => AppError::conflict("This time slot is already booked"),
            _ => db_err("Failed to create booking")(e),
        })
    }

    /// Store a new status and stamp the matching timestamp column.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        cancellation_reason: Option<&str>,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET \
                status = $2, \
                cancellation_reason = COALESCE($3, cancellation_reason), \
                confirmed_at = CASE WHEN $2 = 'confirmed'::booking_status \
                    THEN NOW() ELSE confirmed_at END, \
                completed_at = CASE WHEN $2 = 'completed'::booking_status \
                    THEN NOW() ELSE completed_at END, \
                cancelled_at = CASE WHEN $2 = 'cancelled'::booking_status \
                    THEN NOW() ELSE cancelled_at END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(cancellation_reason)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update booking status"))
    }

    pub async fn set_payment_status(
        &self,
        id: Uuid,
        payment_status: BookingPaymentStatus,
    ) -> AppResult<()> {
        sqlx::query("UPDATE bookings SET payment_status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(payment_status)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to update booking payment status"))?;
        Ok(())
    }
}
