//! Role checks for role-gated routes.

pub mod guard;

pub use guard::RoleGuard;
