//! Instructor session bookings.

pub mod model;
pub mod status;

pub use model::{Booking, CreateBooking, SLOT_CONSTRAINT};
pub use status::{BookingPaymentStatus, BookingStatus};
