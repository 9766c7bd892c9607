//! Gym entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::status::GymStatus;

/// A gym listing owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Gym {
    /// Unique gym identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub website: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Gallery image URLs.
    pub images: Json<Vec<String>>,
    /// Amenity tags (e.g. `"sauna"`, `"parking"`), matched by containment.
    pub amenities: Json<Vec<String>>,
    /// Free-form opening hours keyed by weekday.
    pub operating_hours: Option<Json<serde_json::Value>>,
    /// Moderation state.
    pub status: GymStatus,
    /// Set by an admin independently of `status`.
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    /// Average review rating (0.00 - 5.00).
    pub rating: Decimal,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gym {
    /// Whether the gym may appear in public listings and lookups.
    pub fn is_publicly_visible(&self) -> bool {
        self.status == GymStatus::Approved && self.is_verified
    }

    /// Whether `user_id` owns this gym.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// A gym row returned by the discovery query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GymListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub gym: Gym,
    /// Great-circle distance from the search origin, when one was given.
    pub distance_km: Option<f64>,
}

/// Data required to create a gym.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGym {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub operating_hours: Option<serde_json::Value>,
}

/// Owner-editable gym fields. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGym {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub operating_hours: Option<serde_json::Value>,
}

impl UpdateGym {
    /// Whether the update names a field that sends the gym back to review.
    ///
    /// Presence in the request counts, whether or not the value differs.
    pub fn requires_reapproval(&self) -> bool {
        self.name.is_some() || self.address.is_some() || self.phone.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reapproval_fields() {
        let name = UpdateGym {
            name: Some("Iron Temple".into()),
            ..Default::default()
        };
        let address = UpdateGym {
            address: Some("12 Nnebisi Rd".into()),
            ..Default::default()
        };
        let phone = UpdateGym {
            phone: Some("+2348000000000".into()),
            ..Default::default()
        };
        assert!(name.requires_reapproval());
        assert!(address.requires_reapproval());
        assert!(phone.requires_reapproval());
    }

    #[test]
    fn test_description_only_update_keeps_status() {
        let update = UpdateGym {
            description: Some("Now with a sauna".into()),
            amenities: Some(vec!["sauna".into()]),
            ..Default::default()
        };
        assert!(!update.requires_reapproval());
    }
}
