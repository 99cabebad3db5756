//! Pagination types for list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, QUESTIONS_PER_PAGE};

/// Raw `page` query parameter.
///
/// Kept as text so that a malformed value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}

/// Highest page whose offset still fits a signed 64-bit SQL bind value
const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / QUESTIONS_PER_PAGE + 1;

/// 1-based page over a fixed-size window of [`QUESTIONS_PER_PAGE`] items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    /// Create a page request; page 0 is treated as the first page.
    ///
    /// Pages past `MAX_PAGE_NUMBER` are clamped to it. That page is
    /// already beyond any real table, so it still renders empty.
    pub fn new(page: u64) -> Self {
        Self {
            page: page.clamp(DEFAULT_PAGE_NUMBER, MAX_PAGE_NUMBER),
        }
    }

    /// Parse a query value, defaulting to the first page when absent or not a number.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse::<u64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn number(&self) -> u64 {
        self.page
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page - 1) * QUESTIONS_PER_PAGE
    }

    pub fn limit(&self) -> u64 {
        QUESTIONS_PER_PAGE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}
