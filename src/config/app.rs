//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for service settings: HTTP
//! listener, artifact storage, crop parameters, outbound fetch and the
//! retention sweep.
//!
//! Automatically loads `.env` files for non-production environments. It
//! checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! The configuration is built once at startup and its pieces are passed
//! explicitly to the components that need them — the storage root in
//! particular is injected into the store, the static handler and the
//! sweep rather than living in a global.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, ...) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `PORT` | Listening port | `8000` |
//! | `PUBLIC_BASE_URL` | Absolute prefix for artifact references | *none* |
//! | `STATIC_DIR` | Artifact storage root | `static` |
//! | `WHITE_TOLERANCE` | White-mask tolerance (clamped to 255) | `10` |
//! | `CROP_MARGIN` | Bounding-box margin in pixels | `10` |
//! | `FETCH_TIMEOUT_SECS` | Outbound fetch timeout | `30` |
//! | `RETENTION_SECS` | Max artifact age before deletion | `180` |
//! | `SWEEP_INTERVAL_SECS` | Sweep cadence | `60` |
//!
//! # Example
//! ```rust,no_run
//! use whitecrop::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("serving on port {}", cfg.http.port);
//! ```

use std::{env, path::PathBuf, time::Duration};

use crate::config::{
    crop::CropConfig,
    env::{read_u32, read_u64},
    fetch::FetchConfig,
    retention::RetentionConfig,
    storage::StorageConfig,
    web::HttpConfig,
};

/// Top-level service configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Artifact storage root.
    pub storage: StorageConfig,
    /// Crop engine parameters.
    pub crop: CropConfig,
    /// Outbound fetch bounds.
    pub fetch: FetchConfig,
    /// Artifact retention sweep configuration.
    pub retention: RetentionConfig,
}

impl AppConfig {
    /// Loads the service configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to
    ///   defaults for missing or unparsable values.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let port = read_u32("PORT", 8000).min(u16::MAX as u32) as u16;
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let root = env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let tolerance = read_u32("WHITE_TOLERANCE", 10).min(255) as u8;
        let margin = read_u32("CROP_MARGIN", 10);

        AppConfig {
            http: HttpConfig {
                port,
                public_base_url,
            },
            storage: StorageConfig { root },
            crop: CropConfig { tolerance, margin },
            fetch: FetchConfig {
                timeout: Duration::from_secs(read_u64("FETCH_TIMEOUT_SECS", 30)),
            },
            retention: RetentionConfig {
                max_age: Duration::from_secs(read_u64("RETENTION_SECS", 180)),
                interval: Duration::from_secs(read_u64("SWEEP_INTERVAL_SECS", 60)),
            },
        }
    }
}
