//! # Fetch Configuration
//!
//! Bounds on the outbound image fetch.

use std::time::Duration;

/// Read from `FETCH_TIMEOUT_SECS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-request timeout for the outbound fetch. A hung upstream fails
    /// the request instead of blocking its handler forever.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}
