//! # fitlink-core
//!
//! Core crate for the Fitlink backend. Contains configuration schemas,
//! pagination and sorting types, the status lifecycle trait, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Fitlink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
