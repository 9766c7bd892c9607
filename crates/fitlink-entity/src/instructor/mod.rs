//! Gym instructor entities.

pub mod model;
pub mod status;

pub use model::{CreateInstructor, Instructor, UpdateInstructor};
pub use status::InstructorStatus;
