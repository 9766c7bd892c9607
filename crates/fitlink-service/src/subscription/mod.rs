//! Gym memberships: subscribe, cancel, renew, and expiry sweeps.

pub mod service;

pub use service::{NewSubscription, SubscriptionService, SubscriptionView};
