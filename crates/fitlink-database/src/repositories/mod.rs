//! Repository implementations for all Fitlink tables.

pub mod booking;
pub mod chat;
pub mod dashboard;
pub mod device_token;
pub mod fraud_report;
pub mod gym;
pub mod gym_application;
pub mod instructor;
pub mod notification;
pub mod payment;
pub mod routine;
pub mod session;
pub mod subscription;
pub mod user;

pub use booking::BookingRepository;
pub use chat::ChatRepository;
pub use dashboard::DashboardRepository;
pub use device_token::DeviceTokenRepository;
pub use fraud_report::{FraudReportFilter, FraudReportRepository};
pub use gym::{GymRepository, GymSearch, GymSortField};
pub use gym_application::{ApplicationReview, GymApplicationRepository};
pub use instructor::InstructorRepository;
pub use notification::{NotificationFilter, NotificationRepository};
pub use payment::PaymentRepository;
pub use routine::{RoutineFilter, RoutineRepository};
pub use session::SessionRepository;
pub use subscription::SubscriptionRepository;
pub use user::UserRepository;

use fitlink_core::error::{AppError, ErrorKind};

/// Map a sqlx error into a database `AppError` carrying `context`.
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

/// Name of the violated constraint, if `err` is a constraint violation.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
