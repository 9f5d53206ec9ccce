//! # Image Fetching Abstractions
//!
//! Defines the seam for retrieving source image bytes from a URL.
//!
//! This module provides:
//! - [`FetchError`] — failure categories of an outbound fetch.
//! - [`ImageFetcher`] — an async trait so the service layer and handler
//!   tests can swap the real HTTP client for stubs.
//!
//! The production implementation lives in
//! [`http_fetcher`](crate::fetch::http_fetcher).

pub mod http_fetcher;

pub use http_fetcher::HttpFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Failure categories of an outbound image fetch.
///
/// One attempt, no retry: the caller sees the failure immediately.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The upstream answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Retrieves raw image bytes from a caller-supplied URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the body at `url` as raw bytes.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the URL is unreachable, the request
    /// times out or the upstream responds with a non-success status.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
