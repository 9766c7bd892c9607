//! Chat, participant and message repository.

use sqlx::PgPool;
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_entity::chat::{
    Chat, ChatParticipant, ChatSummary, ChatType, CreateMessage, Message, ParticipantRole,
};

use super::db_err;

#[derive(Debug, Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Chat>> {
        sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find chat"))
    }

    /// Chats the user actively participates in, with unread counts,
    /// most recent activity first.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<ChatSummary>> {
        sqlx::query_as::<_, ChatSummary>(
            "SELECT c.*, \
                (SELECT COUNT(*) FROM messages m \
                 WHERE m.chat_id = c.id AND m.sender_id <> $1 AND m.is_read = FALSE) \
                    AS unread_count \
             FROM chats c \
             JOIN chat_participants p ON p.chat_id = c.id \
             WHERE p.user_id = $1 AND p.is_active = TRUE \
             ORDER BY COALESCE(c.last_message_at, c.created_at) DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list chats"))
    }

    pub async fn create(&self, chat_type: ChatType, title: Option<&str>) -> AppResult<Chat> {
        sqlx::query_as::<_, Chat>("INSERT INTO chats (type, title) VALUES ($1, $2) RETURNING *")
            .bind(chat_type)
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to create chat"))
    }

    /// Add (or re-activate) a participant.
    pub async fn add_participant(
        &self,
        chat_id: Uuid,
        user_id: Uuid,
        role: ParticipantRole,
    ) -> AppResult<ChatParticipant> {
        sqlx::query_as::<_, ChatParticipant>(
            "INSERT INTO chat_participants (chat_id, user_id, role) VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT chat_participants_chat_user_key DO UPDATE SET \
                role = EXCLUDED.role, is_active = TRUE, left_at = NULL, updated_at = NOW() \
             RETURNING *",
        )
        .bind(chat_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to add chat participant"))
    }

    pub async fn find_participant(
        &self,
        chat_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<ChatParticipant>> {
        sqlx::query_as::<_, ChatParticipant>(
            "SELECT * FROM chat_participants WHERE chat_id = $1 AND user_id = $2",
        )
        .bind(chat_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find chat participant"))
    }

    pub async fn list_participants(&self, chat_id: Uuid) -> AppResult<Vec<ChatParticipant>> {
        sqlx::query_as::<_, ChatParticipant>(
            "SELECT * FROM chat_participants WHERE chat_id = $1 ORDER BY joined_at",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list chat participants"))
    }

    /// Messages newest first.
    pub async fn list_messages(
        &self,
        chat_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Message>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = $1")
            .bind(chat_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count messages"))?;

        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE chat_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(chat_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list messages"))?;

        Ok(PageResponse::new(messages, page.page, page.page_size, total as u64))
    }

    /// Insert a message and bump the chat's `last_message_at`.
    pub async fn create_message(&self, data: &CreateMessage) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (chat_id, sender_id, type, content, file_url, file_name, \
                file_size, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.chat_id)
        .bind(data.sender_id)
        .bind(data.message_type)
        .bind(&data.content)
        .bind(&data.file_url)
        .bind(&data.file_name)
        .bind(data.file_size)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create message"))?;

        sqlx::query("UPDATE chats SET last_message_at = $2, updated_at = NOW() WHERE id = $1")
            .bind(data.chat_id)
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to update chat activity"))?;

        Ok(message)
    }

    /// Mark every unread message not sent by `reader_id` as read.
    pub async fn mark_read(&self, chat_id: Uuid, reader_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE, read_at = NOW(), updated_at = NOW() \
             WHERE chat_id = $1 AND sender_id <> $2 AND is_read = FALSE",
        )
        .bind(chat_id)
        .bind(reader_id)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to mark messages read"))?;
        Ok(result.rows_affected())
    }
}
