//! Gym domain entities.

pub mod model;
pub mod status;

pub use model::{CreateGym, Gym, GymListing, UpdateGym};
pub use status::GymStatus;
