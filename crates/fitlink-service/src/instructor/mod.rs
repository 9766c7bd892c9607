//! Instructor management by gym owners, and the trainer's own profile.

pub mod service;

pub use service::{InstructorService, TrainerProfileUpdate};
