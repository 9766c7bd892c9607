//! Fraud report investigation lifecycle.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Investigation state of a fraud report.
    pub enum FraudStatus as "fraud_status" {
        Pending => "pending",
        UnderInvestigation => "under_investigation",
        Resolved => "resolved",
        Dismissed => "dismissed",
        Escalated => "escalated",
    }
}

impl Lifecycle for FraudStatus {
    const ENTITY: &'static str = "fraud report";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[
                Self::UnderInvestigation,
                Self::Resolved,
                Self::Dismissed,
                Self::Escalated,
            ],
            Self::UnderInvestigation => &[Self::Resolved, Self::Dismissed, Self::Escalated],
            Self::Resolved | Self::Dismissed | Self::Escalated => &[],
        }
    }
}

impl FraudStatus {
    /// States that still need admin attention.
    pub const OPEN: &'static [Self] = &[Self::Pending, Self::UnderInvestigation];
}
