//! Instructor entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::status::InstructorStatus;

/// An instructor employed at a gym, optionally linked to a trainer account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: Uuid,
    pub gym_id: Uuid,
    /// Trainer account that manages this profile.
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub years_experience: i32,
    pub certifications: Json<Vec<String>>,
    pub profile_picture: Option<String>,
    /// Price of one hour of instruction.
    pub hourly_rate: Decimal,
    pub availability_schedule: Option<Json<serde_json::Value>>,
    /// Temporarily accepting bookings.
    pub is_available: bool,
    pub status: InstructorStatus,
    pub rating: Decimal,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Instructor {
    /// Whether members may currently book this instructor.
    pub fn is_bookable(&self) -> bool {
        self.status == InstructorStatus::Active && self.is_available
    }
}

/// Data required to create an instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstructor {
    pub gym_id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub years_experience: i32,
    pub certifications: Vec<String>,
    pub profile_picture: Option<String>,
    pub hourly_rate: Decimal,
    pub availability_schedule: Option<serde_json::Value>,
}

/// Editable instructor fields. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInstructor {
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub years_experience: Option<i32>,
    pub certifications: Option<Vec<String>>,
    pub profile_picture: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub availability_schedule: Option<serde_json::Value>,
    pub is_available: Option<bool>,
    pub status: Option<InstructorStatus>,
}
