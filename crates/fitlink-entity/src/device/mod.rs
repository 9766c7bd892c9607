//! Push-notification device registrations.

pub mod model;

pub use model::{DeviceToken, Platform, RegisterDevice};
