//! Booking entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{BookingPaymentStatus, BookingStatus};

/// Name of the unique index that stops two live bookings taking the same
/// instructor slot.
pub const SLOT_CONSTRAINT: &str = "bookings_instructor_slot_key";

/// A member's booked session with an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub instructor_id: Uuid,
    pub gym_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Session length in minutes.
    pub duration_minutes: i32,
    pub amount: Decimal,
    pub currency: String,
    pub status: BookingStatus,
    pub payment_status: BookingPaymentStatus,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub user_id: Uuid,
    pub instructor_id: Uuid,
    pub gym_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i32,
    pub amount: Decimal,
    pub currency: String,
    pub notes: Option<String>,
}

impl CreateBooking {
    /// Minutes between `start` and `end`, or `None` unless `end` is later.
    pub fn duration_between(start: NaiveTime, end: NaiveTime) -> Option<i32> {
        let minutes = (end - start).num_minutes();
        (minutes > 0).then_some(minutes as i32)
    }

    /// Fee for `minutes` of instruction at `hourly_rate`, rounded to cents.
    pub fn fee(hourly_rate: Decimal, minutes: i32) -> Decimal {
        (hourly_rate * Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
    }
}
