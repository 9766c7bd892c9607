//! Gym ownership, moderation, and public discovery.

pub mod discovery;
pub mod service;

pub use discovery::{DiscoveryQuery, DiscoveryService};
pub use service::{GymService, OwnedGym};
