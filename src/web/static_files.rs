//! # Static Artifact Serving
//!
//! Axum handler for `GET /static/{name}`: streams a stored artifact back
//! with a content type inferred from its file extension.
//!
//! The storage root is injected via the [`StaticRoot`] extension. Names
//! carrying path separators or `..` segments never resolve — they get the
//! same `404 {"error": "File not found"}` as a missing file.

use std::path::PathBuf;

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Extension,
};

use crate::web::error::ApiError;

/// The artifact storage root, shared with the store and the sweep.
#[derive(Clone, Debug)]
pub struct StaticRoot(pub PathBuf);

/// Axum handler for `GET /static/{name}`.
pub async fn serve_artifact(
    Extension(StaticRoot(root)): Extension<StaticRoot>,
    Path(name): Path<String>,
) -> Response {
    if name.contains(['/', '\\']) || name.contains("..") {
        return ApiError::not_found("File not found").into_response();
    }

    match tokio::fs::read(root.join(&name)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&name))], bytes).into_response(),
        Err(_) => ApiError::not_found("File not found").into_response(),
    }
}

/// Infers a content type from the file name's extension.
pub fn content_type_for(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_covers_served_image_formats() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.gif"), "image/gif");
        assert_eq!(content_type_for("a.webp"), "image/webp");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(content_type_for("a.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
        assert_eq!(content_type_for(""), "application/octet-stream");
    }
}
