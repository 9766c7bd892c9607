//! Notification log entities.

pub mod model;
pub mod status;

pub use model::{CreateNotification, NotificationChannel, NotificationLog, NotificationType};
pub use status::NotificationStatus;
