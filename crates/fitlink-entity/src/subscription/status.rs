//! Subscription lifecycle.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Stored subscription state. Whether a subscription is *currently*
    /// active also depends on its end date.
    pub enum SubscriptionStatus as "subscription_status" {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Suspended => "suspended",
    }
}

impl Lifecycle for SubscriptionStatus {
    const ENTITY: &'static str = "subscription";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Expired, Self::Cancelled, Self::Suspended],
            Self::Suspended => &[Self::Active, Self::Cancelled],
            // Renewal.
            Self::Expired | Self::Cancelled => &[Self::Active],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_and_renew() {
        let cancelled = SubscriptionStatus::Active
            .transition_to(SubscriptionStatus::Cancelled)
            .unwrap();
        assert_eq!(
            cancelled.transition_to(SubscriptionStatus::Active).unwrap(),
            SubscriptionStatus::Active
        );
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        assert!(SubscriptionStatus::Expired
            .transition_to(SubscriptionStatus::Cancelled)
            .is_err());
        assert!(SubscriptionStatus::Cancelled
            .transition_to(SubscriptionStatus::Suspended)
            .is_err());
        assert!(SubscriptionStatus::Active
            .transition_to(SubscriptionStatus::Active)
            .is_err());
    }
}
