//! Chat membership and messaging.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::types::{PageRequest, PageResponse};
use fitlink_database::repositories::{ChatRepository, UserRepository};
use fitlink_entity::chat::{
    Chat, ChatParticipant, ChatSummary, ChatType, CreateMessage, Message, ParticipantRole,
};

use crate::context::RequestContext;

#[derive(Debug, Clone)]
pub struct NewChat {
    pub chat_type: ChatType,
    pub title: Option<String>,
    pub participant_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatDetail {
    #[serde(flatten)]
    pub chat: Chat,
    pub participants: Vec<ChatParticipant>,
}

#[derive(Debug, Clone)]
pub struct ChatService {
    chat_repo: Arc<ChatRepository>,
    user_repo: Arc<UserRepository>,
}

impl ChatService {
    pub fn new(chat_repo: Arc<ChatRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            chat_repo,
            user_repo,
        }
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<ChatSummary>, AppError> {
        self.chat_repo.list_for_user(ctx.user_id).await
    }

    /// Open a chat. The creator moderates it as `admin`.
    pub async fn create(&self, ctx: &RequestContext, input: NewChat) -> Result<ChatDetail, AppError> {
        let others: Vec<Uuid> = input
            .participant_ids
            .into_iter()
            .filter(|id| *id != ctx.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if others.is_empty() {
            return Err(AppError::field(
                "participant_ids",
                "The participant ids field must contain at least one other user.",
            ));
        }

        let found = self.user_repo.find_many(&others).await?;
        if found.len() != others.len() {
            return Err(AppError::field(
                "participant_ids",
                "One or more selected participants do not exist.",
            ));
        }

        let chat = self
            .chat_repo
            .create(input.chat_type, input.title.as_deref())
            .await?;
        let mut participants = Vec::with_capacity(others.len() + 1);
        participants.push(
            self.chat_repo
                .add_participant(chat.id, ctx.user_id, ParticipantRole::Admin)
                .await?,
        );
        for user_id in others {
            participants.push(
                self.chat_repo
                    .add_participant(chat.id, user_id, ParticipantRole::Participant)
                    .await?,
            );
        }

        info!(
            chat_id = %chat.id,
            creator_id = %ctx.user_id,
            participants = participants.len(),
            "Chat created"
        );
        Ok(ChatDetail { chat, participants })
    }

    pub async fn get(&self, ctx: &RequestContext, chat_id: Uuid) -> Result<ChatDetail, AppError> {
        let chat = self.find(chat_id).await?;
        self.participant(ctx, chat_id).await?;
        let participants = self.chat_repo.list_participants(chat_id).await?;
        Ok(ChatDetail { chat, participants })
    }

    pub async fn messages(
        &self,
        ctx: &RequestContext,
        chat_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Message>, AppError> {
        self.find(chat_id).await?;
        self.participant(ctx, chat_id).await?;
        self.chat_repo.list_messages(chat_id, &page).await
    }

    pub async fn send(
        &self,
        ctx: &RequestContext,
        mut data: CreateMessage,
    ) -> Result<Message, AppError> {
        let chat = self.find(data.chat_id).await?;
        if !chat.is_active {
            return Err(AppError::business_rule("This chat is no longer active"));
        }
        let participant = self.participant(ctx, chat.id).await?;
        if !participant.is_active {
            return Err(AppError::authorization(
                "Access denied. You have left this chat.",
            ));
        }

        data.sender_id = ctx.user_id;
        data.check_payload()?;

        let message = self.chat_repo.create_message(&data).await?;
        info!(chat_id = %chat.id, message_id = %message.id, sender_id = %ctx.user_id, "Message sent");
        Ok(message)
    }

    /// Mark everything the caller has not sent as read.
    pub async fn mark_read(&self, ctx: &RequestContext, chat_id: Uuid) -> Result<u64, AppError> {
        self.find(chat_id).await?;
        self.participant(ctx, chat_id).await?;
        self.chat_repo.mark_read(chat_id, ctx.user_id).await
    }

    async fn find(&self, chat_id: Uuid) -> Result<Chat, AppError> {
        self.chat_repo
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::not_found("Chat not found"))
    }

    async fn participant(
        &self,
        ctx: &RequestContext,
        chat_id: Uuid,
    ) -> Result<ChatParticipant, AppError> {
        self.chat_repo
            .find_participant(chat_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::authorization("Access denied. You are not a participant in this chat.")
            })
    }
}
