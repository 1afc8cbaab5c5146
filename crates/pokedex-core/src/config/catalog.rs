//! Catalog listing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Page size used when a listing request omits `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> i64 {
    10
}
