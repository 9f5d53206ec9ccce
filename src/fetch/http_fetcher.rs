//! # HTTP Image Fetcher (reqwest)
//!
//! Production [`ImageFetcher`] built on a shared [`reqwest::Client`].
//!
//! The client carries an explicit request timeout so a hung upstream
//! surfaces as a [`FetchError::Request`] instead of blocking the handler
//! indefinitely. Redirects follow reqwest's default policy; there is no
//! retry.
//!
//! # Example
//! ```rust,no_run
//! use std::time::Duration;
//! use whitecrop::fetch::{HttpFetcher, ImageFetcher};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let fetcher = HttpFetcher::new(Duration::from_secs(30))?;
//! let bytes = fetcher.fetch("http://example.com/logo.png").await?;
//! println!("fetched {} bytes", bytes.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::{FetchError, ImageFetcher};

/// Fetches image bytes over HTTP(S) with a bounded per-request timeout.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = resp.bytes().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetch_bytes(url).await
    }
}
