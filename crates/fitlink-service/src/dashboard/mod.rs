//! Role dashboards backed by aggregate queries.

pub mod service;

pub use service::{DashboardService, RevenueReport};
