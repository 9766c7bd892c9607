//! Fraud reports and the polymorphic reportable reference.

pub mod model;
pub mod reportable;
pub mod status;

pub use model::{CreateFraudReport, FraudReport, ReportType, Severity};
pub use reportable::{ReportableKind, ReportableRef};
pub use status::FraudStatus;
