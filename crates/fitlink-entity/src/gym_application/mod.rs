//! Gym business-registration applications.

pub mod model;
pub mod status;

pub use model::{CreateGymApplication, GymApplication};
pub use status::ApplicationStatus;
