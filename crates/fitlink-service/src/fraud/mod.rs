//! Fraud reports filed by members and worked by admins.

pub mod service;

pub use service::{FraudReportService, NewFraudReport};
