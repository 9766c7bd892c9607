//! Workout routines.

pub mod service;

pub use service::RoutineService;
