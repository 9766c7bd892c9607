//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 15;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamped to the global maximum page size.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self::bounded(page, page_size, MAX_PAGE_SIZE)
    }

    /// Create a new page request with an explicit upper bound on page size.
    pub fn bounded(page: u64, page_size: u64, max_page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Saturates at `i64::MAX` so the value always binds as a Postgres BIGINT.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size.max(1))
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Transform every item while keeping the page metadata.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    /// Metadata block in the shape mobile clients consume.
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            current_page: self.page,
            last_page: self.total_pages,
            per_page: self.page_size,
            total: self.total_items,
        }
    }
}

/// `{current_page, last_page, per_page, total}` block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_clamping() {
        let page = PageRequest::new(3, 15);
        assert_eq!(page.offset(), 30);
        assert_eq!(page.limit(), 15);

        let clamped = PageRequest::new(0, 10_000);
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.page_size, 100);

        let bounded = PageRequest::bounded(1, 80, 50);
        assert_eq!(bounded.page_size, 50);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        let last = PageRequest::new(u64::MAX, 100);
        assert_eq!(last.offset(), i64::MAX as u64);
        assert_eq!(last.offset() as i64, i64::MAX);

        let far = PageRequest::new(1_000_000_000_000_000_000, 15);
        assert_eq!(far.offset() as i64, i64::MAX);
    }

    #[test]
    fn test_page_response_meta() {
        let page = PageResponse::new(vec![1, 2, 3], 2, 3, 7);
        let meta = page.meta();
        assert_eq!(meta.last_page, 3);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total, 7);

        let empty: PageResponse<u8> = PageResponse::new(vec![], 1, 15, 0);
        assert_eq!(empty.meta().last_page, 1);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = PageResponse::new(vec![1, 2], 1, 2, 4).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 2);
    }
}
