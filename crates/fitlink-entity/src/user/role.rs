//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles that gate route access.
///
/// The set is closed. Admin is the only privileged role and passes every
/// role check; the other roles only pass checks that name them exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Gym-goer holding subscriptions and bookings.
    Member,
    /// Instructor with a linked instructor profile.
    Trainer,
    /// Owner of (at most) one gym.
    GymOwner,
    /// Platform administrator.
    Admin,
}

impl UserRole {
    /// Whether this role bypasses every role check.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role satisfies a route that requires `required`.
    pub fn satisfies(&self, required: UserRole) -> bool {
        *self == required || self.is_privileged()
    }

    /// Roles a user may pick for themselves at registration.
    pub fn is_self_assignable(&self) -> bool {
        !self.is_privileged()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Trainer => "trainer",
            Self::GymOwner => "gym_owner",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = fitlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // "user" is the pre-split name for members.
            "member" | "user" => Ok(Self::Member),
            "trainer" => Ok(Self::Trainer),
            "gym_owner" => Ok(Self::GymOwner),
            "admin" => Ok(Self::Admin),
            _ => Err(fitlink_core::AppError::field(
                "role",
                format!("Invalid user role: '{s}'. Expected one of: member, trainer, gym_owner, admin"),
            )),
        }
    }
}
