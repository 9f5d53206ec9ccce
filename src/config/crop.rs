//! # Crop Configuration
//!
//! Parameters of the white-space crop: tolerance and margin.
//!
//! # Example
//! ```rust
//! use whitecrop::config::crop::CropConfig;
//!
//! let cfg = CropConfig::default();
//! assert_eq!(cfg.tolerance, 10);
//! assert_eq!(cfg.margin, 10);
//! ```

/// Tuning of the crop engine, read from `WHITE_TOLERANCE` / `CROP_MARGIN`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropConfig {
    /// White tolerance in `[0, 255]`.
    pub tolerance: u8,
    /// Safety margin in pixels around the content bounding box.
    pub margin: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            tolerance: 10,
            margin: 10,
        }
    }
}
