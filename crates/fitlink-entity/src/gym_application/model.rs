//! Gym application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// A business-registration record submitted before a gym is approved.
///
/// Review actions stamp the acting admin, a timestamp, and a note on the
/// row itself; there is no separate audit log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GymApplication {
    pub id: Uuid,
    /// Applicant.
    pub user_id: Uuid,
    pub business_name: String,
    pub business_description: Option<String>,
    pub business_address: String,
    pub business_city: String,
    pub business_state: String,
    pub business_country: String,
    pub business_phone: String,
    pub business_email: String,
    pub business_website: Option<String>,
    pub business_registration_number: Option<String>,
    pub tax_identification_number: Option<String>,
    /// Uploaded document URLs.
    pub documents: Json<Vec<String>>,
    /// License document URLs.
    pub licenses: Json<Vec<String>>,
    pub operating_hours: Option<Json<serde_json::Value>>,
    pub amenities: Json<Vec<String>>,
    pub status: ApplicationStatus,
    /// Admin notes (required when changes are requested).
    pub admin_notes: Option<String>,
    pub rejection_reason: Option<String>,
    /// Admin who last acted on the application.
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data an applicant submits (or resubmits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGymApplication {
    pub user_id: Uuid,
    pub business_name: String,
    pub business_description: Option<String>,
    pub business_address: String,
    pub business_city: String,
    pub business_state: String,
    pub business_country: String,
    pub business_phone: String,
    pub business_email: String,
    pub business_website: Option<String>,
    pub business_registration_number: Option<String>,
    pub tax_identification_number: Option<String>,
    pub documents: Vec<String>,
    pub licenses: Vec<String>,
    pub operating_hours: Option<serde_json::Value>,
    pub amenities: Vec<String>,
}
