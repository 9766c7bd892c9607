//! Gym application review lifecycle.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Review state of a gym application.
    pub enum ApplicationStatus as "application_status" {
        Pending => "pending",
        UnderReview => "under_review",
        Approved => "approved",
        Rejected => "rejected",
        /// Sent back to the applicant; resubmission returns it to pending.
        RequiresChanges => "requires_changes",
    }
}

impl Lifecycle for ApplicationStatus {
    const ENTITY: &'static str = "gym application";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[
                Self::UnderReview,
                Self::Approved,
                Self::Rejected,
                Self::RequiresChanges,
            ],
            Self::UnderReview => &[Self::Approved, Self::Rejected, Self::RequiresChanges],
            Self::RequiresChanges => &[Self::Pending, Self::UnderReview],
            Self::Approved | Self::Rejected => &[],
        }
    }
}

impl ApplicationStatus {
    /// Whether the application is still waiting on an admin decision.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::UnderReview)
    }
}
