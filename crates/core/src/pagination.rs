//! Page-number pagination used by every list endpoint.
//!
//! Clients send `?page=&per_page=` (1-based pages). Repositories consume
//! [`PageRequest::limit`] / [`PageRequest::offset`], and responses carry a
//! [`PageMeta`] block computed from the total row count.

use serde::Serialize;

/// Default number of rows per page.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Maximum number of rows per page.
pub const MAX_PER_PAGE: i64 = 100;

/// A normalized page request. Construct via [`PageRequest::new`] so the
/// bounds are always enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    /// Normalize user-provided values.
    ///
    /// - `page` defaults to 1 and never goes below 1.
    /// - `per_page` defaults to [`DEFAULT_PER_PAGE`], floors at 1 and caps at
    ///   [`MAX_PER_PAGE`].
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET` value. Saturates instead of overflowing on absurd pages.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination block returned alongside list data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total = total.max(0);
        let total_pages = if total == 0 {
            0
        } else {
            (total + request.per_page - 1) / request.per_page
        };
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages,
        }
    }
}
