//! Instructor session bookings.

pub mod service;

pub use service::{BookingService, NewBooking, TrainerAction};
