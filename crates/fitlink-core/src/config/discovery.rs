//! Gym discovery listing configuration.

use serde::{Deserialize, Serialize};

/// Page sizing for the public gym listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Page size used when the caller does not send `per_page`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for `per_page`.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    15
}

fn default_max_page_size() -> u64 {
    100
}
