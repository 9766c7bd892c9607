//! Notification log model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::status::NotificationStatus;

db_enum! {
    /// What triggered the notification.
    pub enum NotificationType as "notification_type" {
        SubscriptionExpiry => "subscription_expiry",
        BookingReminder => "booking_reminder",
        PaymentSuccess => "payment_success",
        PaymentFailed => "payment_failed",
        GymApproval => "gym_approval",
        InstructorBooking => "instructor_booking",
        Promotional => "promotional",
        System => "system",
    }
}

db_enum! {
    /// Delivery channel.
    pub enum NotificationChannel as "notification_channel" {
        Push => "push",
        Email => "email",
        Sms => "sms",
        InApp => "in_app",
    }
}

/// A notification addressed to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationLog {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub data: Option<Json<Value>>,
    pub channel: NotificationChannel,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to log a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub data: Option<Value>,
    pub channel: NotificationChannel,
}

impl CreateNotification {
    /// An in-app notification.
    pub fn in_app(
        user_id: Uuid,
        notification_type: NotificationType,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            notification_type,
            title: title.into(),
            body: body.into(),
            data: None,
            channel: NotificationChannel::InApp,
        }
    }

    /// Attach a JSON payload for the client.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
