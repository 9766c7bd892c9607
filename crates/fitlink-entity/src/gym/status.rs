//! Gym approval lifecycle.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Moderation state of a gym listing.
    pub enum GymStatus as "gym_status" {
        /// Awaiting admin approval (new, or edited after approval).
        Pending => "pending",
        /// Approved by an admin; visible once also verified.
        Approved => "approved",
        /// Rejected by an admin.
        Rejected => "rejected",
        /// Taken down after approval.
        Suspended => "suspended",
    }
}

impl Lifecycle for GymStatus {
    const ENTITY: &'static str = "gym";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Suspended, Self::Pending],
            Self::Rejected => &[Self::Pending],
            Self::Suspended => &[Self::Approved, Self::Pending],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_moderated() {
        assert!(GymStatus::Pending.can_transition_to(GymStatus::Approved));
        assert!(GymStatus::Pending.can_transition_to(GymStatus::Rejected));
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        assert!(GymStatus::Pending.transition_to(GymStatus::Suspended).is_err());
        assert!(GymStatus::Rejected.transition_to(GymStatus::Approved).is_err());
        assert!(GymStatus::Approved.transition_to(GymStatus::Rejected).is_err());
    }

    #[test]
    fn test_every_non_pending_state_can_return_to_pending() {
        for status in GymStatus::ALL {
            if *status != GymStatus::Pending {
                assert!(status.can_transition_to(GymStatus::Pending), "{status}");
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("suspended".parse::<GymStatus>().unwrap(), GymStatus::Suspended);
        assert!("archived".parse::<GymStatus>().is_err());
    }
}
