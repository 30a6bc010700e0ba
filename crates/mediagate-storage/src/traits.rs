//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use bytes::Bytes;
use mediagate_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// Whether the failure is worth retrying by the caller.
    ///
    /// Upload/delete/backend/IO failures are usually network or throttling
    /// conditions; invalid keys and misconfiguration are not. Absent keys
    /// never surface as errors: delete is idempotent at the backend.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StorageError::UploadFailed(_)
                | StorageError::DeleteFailed(_)
                | StorageError::BackendError(_)
                | StorageError::IoError(_)
        )
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The orchestrators work against it without coupling to a provider.
///
/// **Key format:** `{folder}/{token}.{ext}`. See the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store an object under the given key and return its public URL.
    ///
    /// Keys carry a per-request random token, so a key's content never
    /// changes once written; backends may serve it with long-lived caching.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String>;

    /// Delete the object at the given key.
    ///
    /// Idempotent: deleting an already-absent key is success, not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an object exists at the given key.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Public URL the object at `key` is (or would be) served from.
    fn url_for(&self, key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
