//! # Crop Request Handler
//!
//! Axum handler for `POST /`: parses the `{"url": ...}` body, runs the
//! [`CropService`] pipeline and answers with a reference to the stored
//! artifact.
//!
//! The handler reads the raw body and parses it itself rather than using
//! the `Json` extractor, so malformed bodies produce the service's own
//! `{"error": "Invalid JSON format"}` payload instead of the extractor's
//! rejection text.
//!
//! ## Responses
//! - `200` `{"url": "/static/processed_image_<id>.png"}` (absolute when a
//!   public base URL is configured)
//! - `400` `{"error": "Invalid JSON format"}` on an unparsable body
//! - `400` `{"error": "URL is required"}` when `url` is missing or empty
//! - `502`/`500` with an error body when the pipeline fails

use std::sync::Arc;

use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::web::HttpConfig;
use crate::service::CropService;
use crate::web::error::ApiError;

#[derive(Deserialize)]
struct CropRequest {
    url: Option<String>,
}

/// JSON response returned after a successful crop.
#[derive(Serialize)]
struct CropResponse {
    /// Reference to the stored artifact, served by `GET /static/{name}`.
    url: String,
}

/// Axum handler for `POST /`.
pub async fn crop_handler(
    Extension(service): Extension<Arc<CropService>>,
    Extension(http): Extension<HttpConfig>,
    body: Bytes,
) -> Response {
    let req: CropRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => return ApiError::bad_request("Invalid JSON format").into_response(),
    };

    let url = match req.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => return ApiError::bad_request("URL is required").into_response(),
    };

    match service.process(&url).await {
        Ok(name) => Json(CropResponse {
            url: artifact_url(http.public_base_url.as_deref(), &name),
        })
        .into_response(),
        Err(e) => {
            warn!(url, error = %e, "crop request failed");
            ApiError::from(e).into_response()
        }
    }
}

/// Builds the artifact reference returned to the client: relative
/// `/static/{name}` by default, absolute when a base URL is configured.
pub fn artifact_url(base: Option<&str>, name: &str) -> String {
    match base {
        Some(base) => format!("{}/static/{}", base.trim_end_matches('/'), name),
        None => format!("/static/{name}"),
    }
}
