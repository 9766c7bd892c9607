//! In-app notification log.

pub mod service;

pub use service::NotificationService;
