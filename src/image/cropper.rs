//! # Crop Abstractions
//!
//! Defines the generic interface for white-space cropping and its options.
//!
//! This module provides:
//! - [`CropOpts`] — tuning parameters for the crop (white tolerance, margin).
//! - [`CropError`] — decode/encode failures surfaced by an engine.
//! - [`ImageCropper`] — a trait abstraction that allows different crop
//!   backends while keeping a consistent API across the service.
//!
//! # Example
//! ```rust
//! use whitecrop::image::cropper::{CropOpts, CropError, ImageCropper};
//!
//! struct PassThrough;
//!
//! impl ImageCropper for PassThrough {
//!     fn crop_white_space(&self, img_bytes: &[u8], _opts: CropOpts) -> Result<Vec<u8>, CropError> {
//!         Ok(img_bytes.to_vec())
//!     }
//! }
//!
//! let opts = CropOpts::default();
//! assert_eq!(opts.tolerance, 10);
//! assert_eq!(opts.margin, 10);
//!
//! let out = PassThrough.crop_white_space(b"abc", opts).unwrap();
//! assert_eq!(out, b"abc");
//! ```

use thiserror::Error;

/// Options controlling a white-space crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropOpts {
    /// White tolerance in `[0, 255]`. A pixel counts as background iff each
    /// of its R, G and B channels is `>= 255 - tolerance`. `0` matches only
    /// pure white, `255` matches everything.
    pub tolerance: u8,
    /// Safety margin in pixels added around the content bounding box before
    /// cropping, clamped to the image bounds.
    pub margin: u32,
}

impl CropOpts {
    /// Creates a new [`CropOpts`] with the given tolerance and margin.
    pub fn new(tolerance: u8, margin: u32) -> Self {
        Self { tolerance, margin }
    }
}

impl Default for CropOpts {
    fn default() -> Self {
        Self {
            tolerance: 10,
            margin: 10,
        }
    }
}

/// Failure modes of a crop engine.
///
/// Fetching the source bytes is the caller's concern; an engine only
/// decodes, crops and re-encodes.
#[derive(Debug, Error)]
pub enum CropError {
    /// The payload could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    /// The cropped image could not be encoded as PNG.
    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),
}

/// Trait defining the white-space crop operation.
///
/// Implementors take raw image bytes in any decodable format and return the
/// cropped result encoded as PNG. This allows flexible backends (the `image`
/// crate, native bindings, stubs in tests) behind one seam.
pub trait ImageCropper: Send + Sync {
    /// Crops the white/near-white border from `img_bytes` per `opts`.
    ///
    /// # Returns
    /// The cropped image encoded as PNG. Given the same bytes and options
    /// the output is byte-identical.
    ///
    /// # Errors
    /// [`CropError::Decode`] if the payload is not a decodable image,
    /// [`CropError::Encode`] if PNG encoding fails.
    fn crop_white_space(&self, img_bytes: &[u8], opts: CropOpts) -> Result<Vec<u8>, CropError>;
}
