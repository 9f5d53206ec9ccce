//! # Router Assembly
//!
//! Builds the service's axum router:
//!
//! - `POST /` — crop a remote image ([`crop_handler`])
//! - `GET /static/{name}` — serve a stored artifact ([`serve_artifact`])
//! - everything else — `404 {"error": "Endpoint not found"}`
//!
//! Unmatched methods on known paths fall through to the same JSON 404 as
//! unknown paths, so the error surface is uniform.
//!
//! Handlers receive their collaborators via extensions: the shared
//! [`CropService`], the [`HttpConfig`] and the artifact [`StaticRoot`].

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::config::web::HttpConfig;
use crate::service::CropService;
use crate::web::crop_handler::crop_handler;
use crate::web::fallback::endpoint_not_found;
use crate::web::static_files::{serve_artifact, StaticRoot};

/// Assembles the application router.
pub fn build_router(service: Arc<CropService>, http: HttpConfig, static_root: PathBuf) -> Router {
    Router::new()
        .route("/", post(crop_handler).fallback(endpoint_not_found))
        .route(
            "/static/{name}",
            get(serve_artifact).fallback(endpoint_not_found),
        )
        .fallback(endpoint_not_found)
        .layer(Extension(service))
        .layer(Extension(http))
        .layer(Extension(StaticRoot(static_root)))
}
