//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use fitlink_core::config::DiscoveryConfig;
use fitlink_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default and ceiling from `[discovery]`).
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest` bounded by configuration.
    pub fn into_page_request(self, config: &DiscoveryConfig) -> PageRequest {
        PageRequest::bounded(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(config.default_page_size),
            config.max_page_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_ceiling() {
        let config = DiscoveryConfig::default();
        let page = PaginationParams::default().into_page_request(&config);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 15);

        let page = PaginationParams {
            page: Some(0),
            per_page: Some(10_000),
        }
        .into_page_request(&config);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
