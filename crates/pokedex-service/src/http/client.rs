//! reqwest-backed [`HttpAdapter`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use pokedex_core::config::SeedConfig;
use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;
use pokedex_core::traits::HttpAdapter;

/// Issues plain GET requests with a fixed timeout. No retries.
#[derive(Debug, Clone)]
pub struct ReqwestHttpAdapter {
    client: reqwest::Client,
}

impl ReqwestHttpAdapter {
    /// Build a client using the seed request timeout.
    pub fn new(config: &SeedConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self { client })
    }
}

fn upstream_error(url: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Request to {url} failed: {err}"),
        err,
    )
}

#[async_trait]
impl HttpAdapter for ReqwestHttpAdapter {
    async fn get_json(&self, url: &str) -> AppResult<serde_json::Value> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| upstream_error(url, e))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| upstream_error(url, e))
    }
}
