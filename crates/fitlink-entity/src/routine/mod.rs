//! Workout routines.

pub mod model;

pub use model::{BodyRegion, CreateRoutine, Difficulty, Routine, Weekday};
