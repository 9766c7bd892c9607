//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

db_enum! {
    /// Self-declared gender on the profile.
    pub enum Gender as "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email (unique, case-insensitive).
    pub email: String,
    /// Argon2id password hash (never serialized).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role gating route access.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-text location (city or area).
    pub location: Option<String>,
    /// Profile picture URL.
    pub profile_picture: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Gender.
    pub gender: Option<Gender>,
    /// Short biography.
    pub bio: Option<String>,
    /// Whether the account has been verified.
    pub is_verified: bool,
    /// When the email address was verified.
    pub email_verified_at: Option<DateTime<Utc>>,
    /// Last successful login or token refresh.
    pub last_active_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_privileged()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Profile fields a user may change on their own account.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
}
