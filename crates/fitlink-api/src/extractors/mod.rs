//! Custom Axum extractors.

pub mod auth;
pub mod client;
pub mod pagination;
pub mod query;
pub mod validated;

pub use auth::AuthUser;
pub use client::ClientInfo;
pub use pagination::PaginationParams;
pub use query::QueryParams;
pub use validated::{OptionalJson, ValidatedJson};
