//! Core type definitions used across the Fitlink workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse, PaginationMeta};
pub use sorting::SortDirection;
