//! Application state.
//!
//! Everything the handlers need is built once at setup and injected through
//! `AppState`; nothing reads process-wide configuration at request time.

use mediagate_core::{config::normalize_folder, Config};
use mediagate_storage::{Storage, StoreIdentity};
use std::sync::Arc;
use std::time::Duration;

/// Upload validation policy: the folder allow-list and the size ceiling.
///
/// A single global size ceiling applies to every media type.
#[derive(Clone, Debug)]
pub struct UploadPolicy {
    pub allowed_folders: Vec<String>,
    pub max_file_size: usize,
}

impl UploadPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_folders: config.allowed_folders().to_vec(),
            max_file_size: config.max_file_size_bytes(),
        }
    }

    /// Exact membership check over the normalized folder name.
    pub fn is_allowed_folder(&self, folder: &str) -> bool {
        let normalized = normalize_folder(folder);
        self.allowed_folders.iter().any(|f| f == &normalized)
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub policy: UploadPolicy,
    pub storage: Arc<dyn Storage>,
    pub identity: StoreIdentity,
    /// Bound on a single put or delete against the store.
    pub storage_timeout: Duration,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>, identity: StoreIdentity) -> Self {
        let policy = UploadPolicy::from_config(&config);
        let storage_timeout = Duration::from_secs(config.storage_timeout_secs());
        Self {
            config,
            policy,
            storage,
            identity,
            storage_timeout,
        }
    }
}
