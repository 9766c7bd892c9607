//! # fitlink-service
//!
//! Business logic for Fitlink. Each service owns the rules of one domain
//! and orchestrates the repositories, the auth primitives, and the status
//! lifecycles it needs.
//!
//! Services take their dependencies at construction time as `Arc`s and
//! receive the acting user as a [`RequestContext`].

pub mod application;
pub mod auth;
pub mod booking;
pub mod chat;
pub mod context;
pub mod dashboard;
pub mod fraud;
pub mod gym;
pub mod instructor;
pub mod notification;
pub mod payment;
pub mod routine;
pub mod subscription;

pub use application::GymApplicationService;
pub use auth::AuthService;
pub use booking::BookingService;
pub use chat::ChatService;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use fraud::FraudReportService;
pub use gym::{DiscoveryService, GymService};
pub use instructor::InstructorService;
pub use notification::NotificationService;
pub use payment::PaymentService;
pub use routine::RoutineService;
pub use subscription::SubscriptionService;
