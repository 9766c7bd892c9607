//! Device token model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

db_enum! {
    /// Client platform.
    pub enum Platform as "device_platform" {
        Ios => "ios",
        Android => "android",
        Web => "web",
    }
}

/// A registered device. The token string is globally unique and follows
/// whichever user last registered it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeviceToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub device_token: String,
    pub platform: Platform,
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub os_version: Option<String>,
    pub app_version: Option<String>,
    pub is_active: bool,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for registering (or re-registering) a device token.
#[derive(Debug, Clone)]
pub struct RegisterDevice {
    pub user_id: Uuid,
    pub device_token: String,
    pub platform: Platform,
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub os_version: Option<String>,
    pub app_version: Option<String>,
}
