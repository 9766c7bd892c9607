//! Chat and participant models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

db_enum! {
    /// Who the conversation is between.
    pub enum ChatType as "chat_type" {
        UserInstructor => "user_instructor",
        UserGym => "user_gym",
        AdminSupport => "admin_support",
    }
}

db_enum! {
    /// A participant's standing inside a chat.
    pub enum ParticipantRole as "participant_role" {
        Participant => "participant",
        Admin => "admin",
        Moderator => "moderator",
    }
}

/// A conversation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chat {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub chat_type: ChatType,
    pub title: Option<String>,
    pub avatar: Option<String>,
    pub metadata: Option<Json<Value>>,
    pub is_active: bool,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A chat together with the caller's unread count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub chat: Chat,
    pub unread_count: i64,
}

/// Membership of a user in a chat.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatParticipant {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub user_id: Uuid,
    pub role: ParticipantRole,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
