//! HTTP client adapter trait used by the seed importer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// Thin seam over an HTTP client.
///
/// Implementations issue a plain GET and hand back the decoded JSON body.
/// No retry or backoff is expected from implementors.
#[async_trait]
pub trait HttpAdapter: Send + Sync + std::fmt::Debug + 'static {
    /// GET `url` and return the response body as JSON.
    async fn get_json(&self, url: &str) -> AppResult<serde_json::Value>;
}

impl dyn HttpAdapter {
    /// GET `url` and deserialize the body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Unexpected response shape from {url}: {e}"),
                e,
            )
        })
    }
}
