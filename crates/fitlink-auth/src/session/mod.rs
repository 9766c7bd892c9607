//! Server-side sessions behind every bearer token.

pub mod manager;
pub mod store;

pub use manager::{IssuedToken, SessionManager};
pub use store::SessionStore;
