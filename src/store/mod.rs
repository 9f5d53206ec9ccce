//! # Artifact Storage Abstractions
//!
//! Defines the seam for persisting produced crop artifacts.
//!
//! This module provides:
//! - [`ArtifactStore`] — trait abstraction for artifact-saving backends
//!   (local FS in production, mocks in tests).
//! - [`unique_artifact_name`] — per-request PNG artifact names.
//!
//! Every request gets its own generated name, so concurrent requests never
//! race on one output file and the retention sweep tracks each artifact's
//! age independently.

pub mod local;

pub use local::LocalArtifactStore;

use anyhow::Result;
use uuid::Uuid;

/// A storage backend for produced crop artifacts.
///
/// Implementors persist the bytes under the given file name and return the
/// absolute path of the stored artifact.
pub trait ArtifactStore: Send + Sync {
    /// Saves an artifact under `name` (a bare file name, no directories).
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] if writing fails.
    fn save(&self, name: &str, bytes: &[u8]) -> Result<String>;
}

/// Generates a unique PNG artifact name for one crop request.
///
/// # Example
/// ```
/// use whitecrop::store::unique_artifact_name;
///
/// let name = unique_artifact_name();
/// assert!(name.starts_with("processed_image_"));
/// assert!(name.ends_with(".png"));
/// ```
pub fn unique_artifact_name() -> String {
    format!("processed_image_{}.png", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl ArtifactStore for MockStore {
        fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((name.to_string(), bytes.len()));
            Ok(format!("/abs/{name}"))
        }
    }

    #[test]
    fn unique_names_have_expected_shape_and_do_not_collide() {
        let a = unique_artifact_name();
        let b = unique_artifact_name();

        for name in [&a, &b] {
            assert!(name.starts_with("processed_image_"));
            assert!(name.ends_with(".png"));
            // 32 hex chars between prefix and extension.
            let hex = &name["processed_image_".len()..name.len() - ".png".len()];
            assert_eq!(hex.len(), 32);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert_ne!(a, b);
    }

    #[test]
    fn store_save_records_and_returns_path() {
        let store = MockStore::default();
        let abs = store.save("a.png", b"12345").expect("save ok");
        assert_eq!(abs, "/abs/a.png");

        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("a.png".to_string(), 5));
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_artifact_store_is_send_sync() {
        assert_send_sync::<dyn ArtifactStore>();
    }
}
