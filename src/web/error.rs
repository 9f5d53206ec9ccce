//! # API Error Responses
//!
//! A single error type that every handler converts failures into, so all
//! error responses share the `{"error": "..."}` JSON shape.
//!
//! Handler-level errors never escape the request boundary: anything a
//! handler can fail with becomes an [`ApiError`] and is rendered as a
//! status code plus JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::service::CropServiceError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A JSON error response: status code plus `{"error": message}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CropServiceError> for ApiError {
    /// Maps pipeline failures to response categories: upstream fetch
    /// problems are a gateway error, everything else is internal.
    fn from(err: CropServiceError) -> Self {
        match err {
            CropServiceError::Fetch(e) => Self::new(
                StatusCode::BAD_GATEWAY,
                format!("Failed to fetch image: {e}"),
            ),
            CropServiceError::Crop(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to process image: {e}"),
            ),
            CropServiceError::Store(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store image: {e}"),
            ),
        }
    }
}
