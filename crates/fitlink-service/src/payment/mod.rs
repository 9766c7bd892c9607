//! Payments against subscriptions and bookings.

pub mod service;

pub use service::{PaymentService, StatusUpdate};
