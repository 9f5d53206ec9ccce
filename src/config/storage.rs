//! # Storage Configuration
//!
//! Where artifacts are written and served from.

use std::path::PathBuf;

/// Read from `STATIC_DIR`. The root is injected into the artifact store,
/// the static file handler and the retention sweep; nothing hardcodes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Flat directory holding the PNG artifacts.
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_static() {
        assert_eq!(StorageConfig::default().root, PathBuf::from("static"));
    }
}
