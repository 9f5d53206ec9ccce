//! # whitecrop
//!
//! HTTP service that trims white borders from remote images.
//!
//! A client POSTs an image URL, the service fetches the image, removes the
//! white/near-white margin around its content, stores the result as a PNG
//! artifact and returns a `/static/...` reference to it. Artifacts are
//! served back over GET and expired by a background retention sweep.
//!
//! The crate is organized as:
//! - `image` — the white-space crop engine (`ImageCropper` and the
//!   `image`-crate implementation)
//! - `fetch` — outbound image retrieval (`ImageFetcher` over `reqwest`)
//! - `store` — artifact persistence under a storage root (`ArtifactStore`)
//! - `service` — fetch → crop → store orchestration (`CropService`)
//! - `web` — axum router, handlers and JSON error responses
//! - `sweep` — the artifact retention sweep
//! - `config` — environment-driven configuration
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use dotenvy;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;
pub use uuid;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod fetch;
pub mod image;
pub mod service;
pub mod store;
pub mod sweep;
pub mod web;
