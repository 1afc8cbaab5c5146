//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Caller-supplied pagination parameters. Either may be omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of records to return.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of records to skip.
    #[serde(default)]
    pub offset: Option<i64>,
}

impl PageRequest {
    /// Create a page request with both parameters set.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Resolve omitted parameters: `limit` falls back to `default_limit`,
    /// `offset` to zero. Supplied values are passed through unchanged.
    pub fn resolve(&self, default_limit: i64) -> PageWindow {
        PageWindow {
            limit: self.limit.unwrap_or(default_limit),
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// A fully resolved `LIMIT`/`OFFSET` pair handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}
