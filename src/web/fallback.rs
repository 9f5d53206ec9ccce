//! Router fallback for unknown path/method combinations.

use axum::response::{IntoResponse, Response};

use crate::web::error::ApiError;

/// Final fallback handler: `404 {"error": "Endpoint not found"}`.
pub async fn endpoint_not_found() -> Response {
    ApiError::not_found("Endpoint not found").into_response()
}
