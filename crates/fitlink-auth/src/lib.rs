//! # fitlink-auth
//!
//! Authentication and authorization for Fitlink.
//!
//! - `jwt`: bearer token encoding and decoding
//! - `password`: Argon2id hashing and the password policy
//! - `session`: server-side sessions backing every token (issue, revoke, validate)
//! - `rbac`: the role guard applied to role-gated routes

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RoleGuard;
pub use session::{IssuedToken, SessionManager, SessionStore};
