//! Image processing: the white-space crop engine.

pub mod cropper;
pub mod white_crop;

pub use cropper::{CropError, CropOpts, ImageCropper};
pub use white_crop::WhiteCropProcessor;
