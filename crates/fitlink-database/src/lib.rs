//! # fitlink-database
//!
//! PostgreSQL connection management, embedded migrations, and one
//! repository per Fitlink table. Repositories own SQL; business rules live
//! in `fitlink-service`.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
