//! Chat messages.

use chrono::{DateTime, Utc};
use fitlink_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

db_enum! {
    /// Payload kind of a message.
    pub enum MessageType as "message_type" {
        Text => "text",
        Image => "image",
        File => "file",
        Audio => "audio",
        Video => "video",
    }
}

/// A single message in a chat.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub message_type: MessageType,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub metadata: Option<Json<Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to post a message.
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub message_type: MessageType,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub metadata: Option<Value>,
}

impl CreateMessage {
    /// Text messages need content; every other type needs a file URL.
    pub fn check_payload(&self) -> AppResult<()> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        match self.message_type {
            MessageType::Text if !present(&self.content) => Err(AppError::field(
                "content",
                "The content field is required for text messages.",
            )),
            MessageType::Text => Ok(()),
            _ if !present(&self.file_url) => Err(AppError::field(
                "file_url",
                "The file url field is required for attachments.",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(message_type: MessageType) -> CreateMessage {
        CreateMessage {
            chat_id: Uuid::nil(),
            sender_id: Uuid::nil(),
            message_type,
            content: None,
            file_url: None,
            file_name: None,
            file_size: None,
            metadata: None,
        }
    }

    #[test]
    fn test_text_requires_content() {
        let mut msg = message(MessageType::Text);
        assert!(msg.check_payload().is_err());
        msg.content = Some("  ".into());
        assert!(msg.check_payload().is_err());
        msg.content = Some("hello".into());
        assert!(msg.check_payload().is_ok());
    }

    #[test]
    fn test_attachment_requires_file_url() {
        let mut msg = message(MessageType::Image);
        msg.content = Some("caption".into());
        let err = msg.check_payload().unwrap_err();
        assert!(err.details.unwrap()["errors"]["file_url"].is_array());
        msg.file_url = Some("https://cdn.example.com/a.png".into());
        assert!(msg.check_payload().is_ok());
    }
}
