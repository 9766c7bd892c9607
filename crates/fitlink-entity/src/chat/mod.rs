//! Chats, their participants, and messages.

pub mod message;
pub mod model;

pub use message::{CreateMessage, Message, MessageType};
pub use model::{Chat, ChatParticipant, ChatSummary, ChatType, ParticipantRole};
