//! Page fetch wrapper — rendered HTML via a Browserless instance.
//!
//! Careers pages are routinely client-side rendered, so a plain GET is not
//! enough; Browserless runs a headless Chrome and returns the DOM after
//! rendering. One call per URL, no retry or caching.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

pub mod extract;

const FETCH_TIMEOUT_SECS: u64 = 60;

/// Seam for the browser-automation service.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns rendered HTML for `url`.
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct ContentRequest<'a> {
    url: &'a str,
}

/// Client for the Browserless `/content` endpoint.
pub struct BrowserlessFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl BrowserlessFetcher {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for BrowserlessFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        debug!(url, "fetching rendered page");

        let response = self
            .client
            .post(format!("{}/content", self.base_url))
            .json(&ContentRequest { url })
            .send()
            .await
            .map_err(|e| AppError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch {
                url: url.to_string(),
                message: format!("browser service returned {status}: {body}"),
            });
        }

        let html = response.text().await.map_err(|e| AppError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(url, bytes = html.len(), "fetched page");
        Ok(html)
    }
}
