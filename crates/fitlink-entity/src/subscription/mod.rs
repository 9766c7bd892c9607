//! Gym membership subscriptions.

pub mod model;
pub mod plan;
pub mod status;

pub use model::{CreateSubscription, Subscription};
pub use plan::PlanType;
pub use status::SubscriptionStatus;
