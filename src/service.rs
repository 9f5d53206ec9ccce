//! # Crop Service
//!
//! Orchestrates one crop request: fetch the source bytes, run the white-space
//! crop, persist the PNG artifact under a generated unique name.
//!
//! The service holds its collaborators behind trait objects so handlers and
//! tests can inject stubs for any of the three stages. It carries no state
//! beyond configuration; concurrent requests share nothing but the storage
//! directory.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::fetch::{FetchError, ImageFetcher};
use crate::image::{CropError, CropOpts, ImageCropper};
use crate::store::{unique_artifact_name, ArtifactStore};

/// Failure of one crop request, by stage.
#[derive(Debug, Error)]
pub enum CropServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Crop(#[from] CropError),
    #[error("failed to store artifact: {0}")]
    Store(#[source] anyhow::Error),
}

/// Fetch → crop → store pipeline behind injectable seams.
#[derive(Clone)]
pub struct CropService {
    fetcher: Arc<dyn ImageFetcher>,
    cropper: Arc<dyn ImageCropper>,
    store: Arc<dyn ArtifactStore>,
    opts: CropOpts,
}

impl CropService {
    pub fn new(
        fetcher: Arc<dyn ImageFetcher>,
        cropper: Arc<dyn ImageCropper>,
        store: Arc<dyn ArtifactStore>,
        opts: CropOpts,
    ) -> Self {
        Self {
            fetcher,
            cropper,
            store,
            opts,
        }
    }

    /// Runs one crop request and returns the stored artifact's file name.
    ///
    /// Deterministic apart from the generated name: the same source bytes
    /// and options produce byte-identical artifact contents.
    pub async fn process(&self, url: &str) -> Result<String, CropServiceError> {
        let bytes = self.fetcher.fetch(url).await?;
        debug!(url, bytes = bytes.len(), "fetched source image");

        let png = self.cropper.crop_white_space(&bytes, self.opts)?;

        let name = unique_artifact_name();
        let abs = self
            .store
            .save(&name, &png)
            .map_err(CropServiceError::Store)?;
        info!(url, artifact = %abs, "stored cropped image");
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubFetcher {
        out: Result<Vec<u8>, ()>,
    }

    #[async_trait]
    impl ImageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            match &self.out {
                Ok(bytes) => Ok(bytes.clone()),
                Err(()) => Err(FetchError::Status {
                    url: url.to_string(),
                    status: reqwest::StatusCode::BAD_GATEWAY,
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingCropper {
        calls: Mutex<Vec<(Vec<u8>, CropOpts)>>,
    }

    impl ImageCropper for RecordingCropper {
        fn crop_white_space(
            &self,
            img_bytes: &[u8],
            opts: CropOpts,
        ) -> Result<Vec<u8>, CropError> {
            self.calls.lock().unwrap().push((img_bytes.to_vec(), opts));
            Ok(b"CROPPED".to_vec())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    impl ArtifactStore for RecordingStore {
        fn save(&self, name: &str, bytes: &[u8]) -> anyhow::Result<String> {
            if self.fail {
                bail!("disk full");
            }
            self.calls
                .lock()
                .unwrap()
                .push((name.to_string(), bytes.to_vec()));
            Ok(format!("/abs/{name}"))
        }
    }

    fn service(
        fetcher: StubFetcher,
        cropper: Arc<RecordingCropper>,
        store: Arc<RecordingStore>,
    ) -> CropService {
        CropService::new(Arc::new(fetcher), cropper, store, CropOpts::new(10, 10))
    }

    #[tokio::test]
    async fn process_pipes_fetched_bytes_through_cropper_into_store() {
        let cropper = Arc::new(RecordingCropper::default());
        let store = Arc::new(RecordingStore::default());
        let svc = service(
            StubFetcher {
                out: Ok(b"SOURCE".to_vec()),
            },
            cropper.clone(),
            store.clone(),
        );

        let name = svc.process("http://example.com/a.png").await.expect("ok");
        assert!(name.starts_with("processed_image_"));
        assert!(name.ends_with(".png"));

        let crop_calls = cropper.calls.lock().unwrap();
        assert_eq!(crop_calls.len(), 1);
        assert_eq!(crop_calls[0].0, b"SOURCE");
        assert_eq!(crop_calls[0].1, CropOpts::new(10, 10));

        let store_calls = store.calls.lock().unwrap();
        assert_eq!(store_calls.len(), 1);
        assert_eq!(store_calls[0].0, name);
        assert_eq!(store_calls[0].1, b"CROPPED");
    }

    #[tokio::test]
    async fn fetch_failure_short_circuits() {
        let cropper = Arc::new(RecordingCropper::default());
        let store = Arc::new(RecordingStore::default());
        let svc = service(StubFetcher { out: Err(()) }, cropper.clone(), store.clone());

        let err = svc.process("http://example.com/a.png").await.unwrap_err();
        assert!(matches!(err, CropServiceError::Fetch(_)), "got: {err:?}");
        assert!(cropper.calls.lock().unwrap().is_empty());
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_a_store_error() {
        let cropper = Arc::new(RecordingCropper::default());
        let store = Arc::new(RecordingStore {
            calls: Mutex::new(vec![]),
            fail: true,
        });
        let svc = service(
            StubFetcher {
                out: Ok(b"SOURCE".to_vec()),
            },
            cropper,
            store,
        );

        let err = svc.process("http://example.com/a.png").await.unwrap_err();
        match err {
            CropServiceError::Store(e) => assert!(e.to_string().contains("disk full")),
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn each_request_gets_its_own_artifact_name() {
        let cropper = Arc::new(RecordingCropper::default());
        let store = Arc::new(RecordingStore::default());
        let svc = service(
            StubFetcher {
                out: Ok(b"SOURCE".to_vec()),
            },
            cropper,
            store.clone(),
        );

        let a = svc.process("http://example.com/a.png").await.unwrap();
        let b = svc.process("http://example.com/a.png").await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.calls.lock().unwrap().len(), 2);
    }
}
