//! # White-Space Crop Engine (image-rs)
//!
//! Provides an [`ImageCropper`] implementation using the [`image`] crate.
//!
//! The engine decodes the payload into an RGBA grid, classifies each pixel
//! against a white tolerance, normalizes the background to opaque white,
//! computes the bounding box of the remaining content, pads it with a
//! clamped safety margin and re-encodes the crop as PNG.
//!
//! Classification looks only at the color channels: a near-white pixel is
//! background no matter how transparent it is. Normalization forces those
//! pixels to `(255,255,255,255)` so they neither count as content in the
//! bounding-box pass nor render transparent in the output.
//!
//! # Example
//! ```rust,no_run
//! use whitecrop::image::white_crop::WhiteCropProcessor;
//! use whitecrop::image::cropper::{CropOpts, ImageCropper};
//!
//! let engine = WhiteCropProcessor::default();
//! let bytes = std::fs::read("logo.png").unwrap();
//! let png = engine.crop_white_space(&bytes, CropOpts::default()).unwrap();
//! std::fs::write("logo_cropped.png", png).unwrap();
//! ```

use std::io::Cursor;

use image::{ColorType, ImageFormat, Rgba, RgbaImage};

use super::cropper::{CropError, CropOpts, ImageCropper};

/// Axis-aligned content rectangle with exclusive `right`/`bottom` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Rectangle covering a full `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Expands the box by `margin` pixels per side, clamped to
    /// `[0, width] x [0, height]`. Never underflows or exceeds the image.
    pub fn expand_clamped(&self, margin: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: (self.right + margin).min(width),
            bottom: (self.bottom + margin).min(height),
        }
    }
}

/// A concrete [`ImageCropper`] built on the `image` crate.
///
/// Supports every input format the `image` crate can decode (PNG, JPEG,
/// GIF, WebP, ...); the output is always PNG.
#[derive(Clone, Debug, Default)]
pub struct WhiteCropProcessor;

impl WhiteCropProcessor {
    /// Crops the white border from `img_bytes`. See the module docs for the
    /// algorithm; [`ImageCropper::crop_white_space`] for the contract.
    pub fn crop_white_space(&self, img_bytes: &[u8], opts: CropOpts) -> Result<Vec<u8>, CropError> {
        let img = image::load_from_memory(img_bytes).map_err(CropError::Decode)?;
        let mut rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        normalize_background(&mut rgba, opts.tolerance);

        // A blank image (all white or all transparent) keeps its full extent.
        let bbox = content_bbox(&rgba)
            .unwrap_or_else(|| BoundingBox::full(width, height))
            .expand_clamped(opts.margin, width, height);

        let cropped = image::imageops::crop_imm(
            &rgba,
            bbox.left,
            bbox.top,
            bbox.width(),
            bbox.height(),
        )
        .to_image();

        encode_png(&cropped)
    }
}

impl ImageCropper for WhiteCropProcessor {
    fn crop_white_space(&self, img_bytes: &[u8], opts: CropOpts) -> Result<Vec<u8>, CropError> {
        WhiteCropProcessor::crop_white_space(self, img_bytes, opts)
    }
}

/// Forces every pixel within `tolerance` of white to opaque white.
///
/// Alpha is ignored during classification, so a near-white transparent
/// pixel also becomes solid background.
fn normalize_background(img: &mut RgbaImage, tolerance: u8) {
    let threshold = 255u8.saturating_sub(tolerance);
    for px in img.pixels_mut() {
        let [r, g, b, _] = px.0;
        if r >= threshold && g >= threshold && b >= threshold {
            *px = Rgba([255, 255, 255, 255]);
        }
    }
}

/// Tightest rectangle containing every pixel that is neither transparent
/// nor opaque white, or `None` when no such pixel exists.
///
/// Expects a normalized grid: all background pixels are exactly
/// `(255,255,255,255)`.
fn content_bbox(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 || (r == 255 && g == 255 && b == 255 && a == 255) {
            continue;
        }
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }
    bbox
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, CropError> {
    let (w, h) = img.dimensions();
    let mut out = Vec::new();
    let mut cur = Cursor::new(&mut out);
    image::write_buffer_with_format(&mut cur, img.as_raw(), w, h, ColorType::Rgba8, ImageFormat::Png)
        .map_err(CropError::Encode)?;
    Ok(out)
}
