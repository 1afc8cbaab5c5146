//! Pagination query parameters.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pokedex_core::types::PageRequest;

/// `?limit=&offset=` on list endpoints. Both are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PaginationParams {
    /// Maximum records to return (default: `catalog.default_limit`).
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
    /// Records to skip (default: 0).
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
