//! Notification delivery lifecycle.

use fitlink_core::traits::Lifecycle;

use super::model::NotificationChannel;

db_enum! {
    /// Delivery state of a notification.
    pub enum NotificationStatus as "notification_status" {
        Pending => "pending",
        Sent => "sent",
        Delivered => "delivered",
        Read => "read",
        Failed => "failed",
    }
}

impl Lifecycle for NotificationStatus {
    const ENTITY: &'static str = "notification";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Sent, Self::Failed],
            Self::Sent => &[Self::Delivered, Self::Read, Self::Failed],
            Self::Delivered => &[Self::Read],
            Self::Read | Self::Failed => &[],
        }
    }
}

impl NotificationStatus {
    /// Status a new notification starts in for `channel`.
    ///
    /// In-app notifications are stored, which is their delivery.
    pub fn initial_for(channel: NotificationChannel) -> Self {
        match channel {
            NotificationChannel::InApp => Self::Delivered,
            _ => Self::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_app_starts_delivered() {
        assert_eq!(
            NotificationStatus::initial_for(NotificationChannel::InApp),
            NotificationStatus::Delivered
        );
        assert_eq!(
            NotificationStatus::initial_for(NotificationChannel::Push),
            NotificationStatus::Pending
        );
    }

    #[test]
    fn test_pending_cannot_be_read() {
        assert!(NotificationStatus::Pending.transition_to(NotificationStatus::Read).is_err());
        assert!(NotificationStatus::Sent.transition_to(NotificationStatus::Read).is_ok());
    }

    #[test]
    fn test_terminal_states() {
        assert!(NotificationStatus::Read.is_terminal());
        assert!(NotificationStatus::Failed.is_terminal());
        assert!(!NotificationStatus::Delivered.is_terminal());
    }
}
