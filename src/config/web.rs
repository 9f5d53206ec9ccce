//! # HTTP Configuration
//!
//! Inbound listener settings and the optional public base URL used when
//! building artifact references.
//!
//! # Example
//! ```rust
//! use whitecrop::config::web::HttpConfig;
//!
//! let cfg = HttpConfig {
//!     port: 8000,
//!     public_base_url: Some("http://cdn.example.com".into()),
//! };
//! assert_eq!(cfg.port, 8000);
//! ```

/// Read from `PORT` / `PUBLIC_BASE_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// Listening port.
    pub port: u16,
    /// Optional absolute prefix for artifact references in responses.
    /// When unset, responses carry the relative `/static/...` path.
    pub public_base_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            public_base_url: None,
        }
    }
}
