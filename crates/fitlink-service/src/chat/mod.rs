//! Conversations between members, trainers, gyms, and support.

pub mod service;

pub use service::{ChatDetail, ChatService, NewChat};
