//! Admin-only handlers. Every route here sits behind the admin role gate.

pub mod analytics;
pub mod applications;
pub mod fraud;
pub mod gyms;
pub mod payments;
