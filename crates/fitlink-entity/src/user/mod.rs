//! User domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, Gender, UpdateProfile, User};
pub use role::UserRole;
