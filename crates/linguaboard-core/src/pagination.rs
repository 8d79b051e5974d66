//! Pagination utilities for list endpoints.
//!
//! Two strategies are in use against the backend:
//!
//! ## Server-side pagination
//!
//! Admin list endpoints for lessons, words, sentences and paragraphs accept
//! `page` and `limit` query parameters:
//! - `page`: Page number (1-indexed, default: 1)
//! - `limit`: Items per page (1-1000, default: 20)
//!
//! ## Client-side pagination
//!
//! Parent and language listings return the whole collection. The dashboard
//! filters it locally and slices the result with [`paginate`], using a
//! 0-indexed page like a table widget does.
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_core::pagination::{PageParams, paginate};
//!
//! let params = PageParams { page: Some(3), limit: Some(50) };
//! assert_eq!(params.page(), 3);
//!
//! let parents = vec!["a", "b", "c"];
//! let page = paginate(&parents, 1, 2);
//! assert_eq!(page.items, &["c"]);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of items per page for server-side listing.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page the backend serves; screens use it to fetch "everything".
pub const MAX_LIMIT: u32 = 1000;

/// Sort direction accepted by admin list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
        }
    }
}

/// Page parameters for server-side pagination.
///
/// # Limits
///
/// - `page` is clamped to a minimum of 1
/// - `limit` is clamped to the range [1, 1000]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl PageParams {
    /// Parameters requesting the whole collection in a single page.
    #[must_use]
    pub fn everything() -> Self {
        Self {
            page: Some(1),
            limit: Some(MAX_LIMIT),
        }
    }

    /// Returns the effective page number, never below 1.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective limit, clamped to [1, 1000].
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// One page of an in-memory collection.
#[derive(Debug, PartialEq, Eq)]
pub struct LocalPage<'a, T> {
    pub items: &'a [T],
    /// 0-indexed page that was requested.
    pub page: usize,
    pub page_size: usize,
    /// Number of items across all pages.
    pub total: usize,
}

impl<T> LocalPage<'_, T> {
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        (self.page + 1) * self.page_size < self.total
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 0 && self.total > 0
    }

    /// 1-indexed position of the first item on this page, 0 when empty.
    #[must_use]
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page * self.page_size + 1
        }
    }
}

/// Slices `items` to the requested 0-indexed page.
///
/// A `page_size` of 0 is treated as 1. Pages beyond the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> LocalPage<'_, T> {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    LocalPage {
        items: &items[start..end],
        page,
        page_size,
        total: items.len(),
    }
}
