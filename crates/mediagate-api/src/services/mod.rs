//! The upload and delete orchestrators.
//!
//! Each request is a stateless pipeline over the shared storage handle; the
//! only suspension point is the store call itself, bounded by the configured
//! timeout. Storage failures are reclassified into transient/permanent here,
//! before they leave the core; the service never retries on its own.

pub mod delete;
pub mod upload;

pub use delete::DeleteService;
pub use upload::UploadService;

use mediagate_core::AppError;
use mediagate_storage::StorageError;

/// Reclassify a storage failure at the orchestrator boundary.
fn reclassify_storage_error(err: StorageError) -> AppError {
    if err.is_transient() {
        AppError::StorageTransient(err.to_string())
    } else {
        AppError::StoragePermanent(err.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    //! In-memory mock storage for orchestrator tests.

    use async_trait::async_trait;
    use bytes::Bytes;
    use mediagate_storage::{Storage, StorageBackend, StorageError, StorageResult};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Mock storage implementation that stores objects in memory.
    #[derive(Clone, Default)]
    pub struct MockStorage {
        objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        fail_puts: Arc<Mutex<Option<StorageErrorKind>>>,
    }

    #[derive(Clone, Copy)]
    pub enum StorageErrorKind {
        Transient,
        Permanent,
    }

    impl MockStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_next_put(&self, kind: StorageErrorKind) {
            *self.fail_puts.lock().unwrap() = Some(kind);
        }

        pub fn has_object(&self, key: &str) -> bool {
            self.objects.lock().unwrap().contains_key(key)
        }

        pub fn object_count(&self) -> usize {
            self.objects.lock().unwrap().len()
        }

        pub fn insert_object(&self, key: &str, data: Vec<u8>) {
            self.objects.lock().unwrap().insert(key.to_string(), data);
        }
    }

    #[async_trait]
    impl Storage for MockStorage {
        async fn put(&self, key: &str, data: Bytes, _content_type: &str) -> StorageResult<String> {
            if let Some(kind) = self.fail_puts.lock().unwrap().take() {
                return Err(match kind {
                    StorageErrorKind::Transient => {
                        StorageError::UploadFailed("connection reset".to_string())
                    }
                    StorageErrorKind::Permanent => {
                        StorageError::InvalidKey("bad key".to_string())
                    }
                });
            }
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), data.to_vec());
            Ok(self.url_for(key))
        }

        async fn delete(&self, key: &str) -> StorageResult<()> {
            // Idempotent: absent keys are fine.
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> StorageResult<bool> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        fn url_for(&self, key: &str) -> String {
            format!("https://media-bucket.s3.eu-west-1.amazonaws.com/{}", key)
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }
}
