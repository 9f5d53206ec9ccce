//! HTTP surface: router, handlers and JSON error responses.

pub mod crop_handler;
pub mod error;
pub mod fallback;
pub mod router;
pub mod static_files;

pub use error::ApiError;
pub use router::build_router;
