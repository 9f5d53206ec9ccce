//! # Local Artifact Storage
//!
//! Concrete [`ArtifactStore`] that writes artifacts to the local filesystem.
//!
//! All artifacts land directly under a configured root directory (flat
//! layout, no subdirectories, no metadata sidecar — the retention sweep
//! derives age purely from filesystem modification time). The root is
//! created on demand and names are sanitized so a crafted name cannot
//! escape it.
//!
//! # Example
//! ```rust,no_run
//! use whitecrop::store::{ArtifactStore, LocalArtifactStore};
//!
//! let store = LocalArtifactStore::new("static");
//! let abs = store.save("processed_image_abc.png", b"\x89PNG...").unwrap();
//! println!("stored at {abs}");
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::ArtifactStore;

/// Stores crop artifacts in a flat directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first save.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Writes `bytes` under the root and returns the absolute path.
    ///
    /// # Behavior
    /// - Trims leading slashes from `name`
    /// - Replaces `..` and path separators to keep the file inside the root
    /// - Creates the root directory if missing
    pub fn save_artifact(&self, name: &str, bytes: &[u8]) -> Result<String> {
        let safe = name
            .trim_start_matches('/')
            .replace("..", "_")
            .replace(['/', '\\'], "_");
        fs::create_dir_all(&self.root)
            .with_context(|| format!("create storage root {:?}", self.root))?;
        let full = self.root.join(&safe);
        fs::write(&full, bytes).with_context(|| format!("write {:?}", &full))?;
        Ok(full.to_string_lossy().into_owned())
    }

    /// Returns the configured root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
        self.save_artifact(name, bytes)
    }
}
