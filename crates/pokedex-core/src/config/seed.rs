//! External seed source configuration.

use serde::{Deserialize, Serialize};

/// Where the seed operation fetches its records from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Listing endpoint of the upstream catalog API.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Number of entries requested in the single seed fetch.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Timeout applied to the seed fetch, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl SeedConfig {
    /// Full URL of the seed fetch, including the page size.
    pub fn listing_url(&self) -> String {
        let separator = if self.source_url.contains('?') { '&' } else { '?' };
        format!("{}{}limit={}", self.source_url, separator, self.page_size)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            page_size: default_page_size(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_source_url() -> String {
    "https://pokeapi.co/api/v2/pokemon".to_string()
}

fn default_page_size() -> u32 {
    650
}

fn default_request_timeout() -> u64 {
    30
}
