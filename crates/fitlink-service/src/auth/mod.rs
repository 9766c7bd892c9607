//! Account lifecycle: registration, login, tokens, profile, devices.

pub mod service;

pub use service::{AuthOutcome, AuthService, LoginInput, RegisterInput};
