//! Gym business-registration applications and their review.

pub mod service;

pub use service::GymApplicationService;
