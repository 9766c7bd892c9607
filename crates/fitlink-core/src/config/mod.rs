//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an environment overlay, and `FITLINK__*`
//! environment variables. Each sub-module represents a logical section.

pub mod app;
pub mod auth;
pub mod booking;
pub mod database;
pub mod discovery;
pub mod logging;
pub mod plans;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::booking::BookingConfig;
pub use self::database::DatabaseConfig;
pub use self::discovery::DiscoveryConfig;
pub use self::logging::LoggingConfig;
pub use self::plans::{PlanTerms, PlansConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Gym discovery listing settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Subscription plan price and duration table.
    #[serde(default)]
    pub plans: PlansConfig,
    /// Instructor booking settings.
    #[serde(default)]
    pub bookings: BookingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `FITLINK__` (e.g. `FITLINK__DATABASE__URL`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FITLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.discovery.default_page_size, 15);
        assert_eq!(config.auth.password_min_length, 8);
        assert_eq!(config.plans.currency, "NGN");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let raw = serde_json::json!({
            "server": { "port": 9000 },
            "plans": { "monthly": { "days": 31, "price": 9000 } }
        });
        let config: AppConfig = serde_json::from_value(raw).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.plans.monthly.days, 31);
        assert_eq!(config.plans.yearly.days, 365);
    }
}
