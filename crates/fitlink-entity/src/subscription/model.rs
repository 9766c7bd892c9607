//! Subscription entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::plan::PlanType;
use super::status::SubscriptionStatus;

/// Days before `end_date` at which a subscription counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// A member's subscription to one gym.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub plan_type: PlanType,
    /// Price charged for the current period.
    pub amount: Decimal,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub auto_renew: bool,
    pub last_payment_at: Option<DateTime<Utc>>,
    pub next_payment_at: Option<DateTime<Utc>>,
    pub features: Json<Vec<String>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Active iff the stored status is active and the end date is still ahead.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active && self.end_date > today
    }

    /// Whole days from `today` until `end_date` (negative once passed).
    pub fn days_until_end(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    /// Expiring soon iff the end date is at most seven days away,
    /// regardless of status.
    pub fn expires_soon_on(&self, today: NaiveDate) -> bool {
        self.days_until_end(today) <= EXPIRING_SOON_DAYS
    }

    /// [`Self::is_active_on`] evaluated for the current UTC date.
    pub fn is_active(&self) -> bool {
        self.is_active_on(Utc::now().date_naive())
    }

    /// [`Self::expires_soon_on`] evaluated for the current UTC date.
    pub fn expires_soon(&self) -> bool {
        self.expires_soon_on(Utc::now().date_naive())
    }

    /// First day of the next period when the subscription is renewed on `today`.
    ///
    /// A still-running subscription is extended from its end date; anything
    /// else restarts today.
    pub fn renewal_start(&self, today: NaiveDate) -> NaiveDate {
        if self.is_active_on(today) {
            self.end_date
        } else {
            today
        }
    }
}

/// Data required to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscription {
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub plan_type: PlanType,
    pub amount: Decimal,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub auto_renew: bool,
    pub notes: Option<String>,
}
