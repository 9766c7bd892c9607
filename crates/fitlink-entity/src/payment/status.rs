//! Payment lifecycle.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Settlement state of a payment.
    pub enum PaymentStatus as "payment_status" {
        Pending => "pending",
        Processing => "processing",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
        Refunded => "refunded",
    }
}

impl Lifecycle for PaymentStatus {
    const ENTITY: &'static str = "payment";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[
                Self::Processing,
                Self::Completed,
                Self::Failed,
                Self::Cancelled,
            ],
            Self::Processing => &[Self::Completed, Self::Failed, Self::Cancelled],
            Self::Completed => &[Self::Refunded],
            Self::Failed | Self::Cancelled | Self::Refunded => &[],
        }
    }
}

impl PaymentStatus {
    /// Whether the owner may still cancel a payment in this state.
    pub fn is_cancellable(&self) -> bool {
        self.can_transition_to(Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_only_after_completion() {
        assert!(PaymentStatus::Completed.can_transition_to(PaymentStatus::Refunded));
        assert!(!PaymentStatus::Pending.can_transition_to(PaymentStatus::Refunded));
        assert!(!PaymentStatus::Processing.can_transition_to(PaymentStatus::Refunded));
    }

    #[test]
    fn test_cancellable_states() {
        assert!(PaymentStatus::Pending.is_cancellable());
        assert!(PaymentStatus::Processing.is_cancellable());
        assert!(!PaymentStatus::Completed.is_cancellable());
    }

    #[test]
    fn test_error_names_both_states() {
        let err = PaymentStatus::Failed
            .transition_to(PaymentStatus::Completed)
            .unwrap_err();
        assert_eq!(
            err.message,
            "Cannot change payment status from 'failed' to 'completed'"
        );
    }
}
