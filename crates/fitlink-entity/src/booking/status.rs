//! Booking lifecycle and payment state.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Lifecycle of a booked session.
    pub enum BookingStatus as "booking_status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no_show",
    }
}

impl Lifecycle for BookingStatus {
    const ENTITY: &'static str = "booking";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::Completed, Self::Cancelled, Self::NoShow],
            Self::Completed | Self::Cancelled | Self::NoShow => &[],
        }
    }
}

db_enum! {
    /// Settlement state of the booking fee, driven by payments.
    pub enum BookingPaymentStatus as "booking_payment_status" {
        Pending => "pending",
        Paid => "paid",
        Failed => "failed",
        Refunded => "refunded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let status = BookingStatus::Pending
            .transition_to(BookingStatus::Confirmed)
            .and_then(|s| s.transition_to(BookingStatus::Completed))
            .unwrap();
        assert_eq!(status, BookingStatus::Completed);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_cannot_complete_unconfirmed_booking() {
        assert!(BookingStatus::Pending.transition_to(BookingStatus::Completed).is_err());
        assert!(BookingStatus::Pending.transition_to(BookingStatus::NoShow).is_err());
    }

    #[test]
    fn test_cancelled_booking_cannot_be_revived() {
        for next in BookingStatus::ALL {
            assert!(!BookingStatus::Cancelled.can_transition_to(*next));
        }
    }
}
