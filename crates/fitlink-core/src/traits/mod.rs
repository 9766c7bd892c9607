//! Core traits defined in `fitlink-core` and implemented by other crates.

pub mod lifecycle;

pub use lifecycle::Lifecycle;
