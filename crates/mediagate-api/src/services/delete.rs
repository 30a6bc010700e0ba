//! Delete orchestrator.
//!
//! Parses the submitted URL, proves it belongs to the configured store, and
//! only then issues the delete. The identity check is the safety contract:
//! without it a caller could point the service at any object in any store.
//! Deleting an already-absent object reports success.

use std::sync::Arc;
use std::time::Duration;

use mediagate_core::models::DeleteResponse;
use mediagate_core::AppError;
use mediagate_storage::{Storage, StoreIdentity};
use url::Url;

use crate::state::AppState;

use super::reclassify_storage_error;

pub struct DeleteService {
    storage: Arc<dyn Storage>,
    identity: StoreIdentity,
    timeout: Duration,
}

impl DeleteService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            identity: state.identity.clone(),
            timeout: state.storage_timeout,
        }
    }

    pub fn with_parts(
        storage: Arc<dyn Storage>,
        identity: StoreIdentity,
        timeout: Duration,
    ) -> Self {
        Self {
            storage,
            identity,
            timeout,
        }
    }

    /// Delete the object referenced by a previously issued URL.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, raw_url: &str) -> Result<DeleteResponse, AppError> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidUrl("URL required".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| AppError::InvalidUrl(format!("Invalid URL: {}", e)))?;

        // Identity check before any store interaction.
        if !self.identity.owns(&url) {
            tracing::warn!(
                url = %url,
                store_base = %self.identity.base_url(),
                "Delete refused: URL does not belong to the configured store"
            );
            return Err(AppError::ForbiddenUrl(url.to_string()));
        }

        let key = self
            .identity
            .key_for(&url)
            .ok_or_else(|| AppError::InvalidUrl("URL does not reference an object key".to_string()))?;

        // Backends absorb absent keys, so success here covers the
        // already-deleted case too.
        let delete = self.storage.delete(&key);
        match tokio::time::timeout(self.timeout, delete).await {
            Ok(Ok(())) => {
                tracing::info!(key = %key, "Object deleted");
                Ok(DeleteResponse { success: true })
            }
            Ok(Err(e)) => Err(reclassify_storage_error(e)),
            Err(_) => {
                tracing::warn!(key = %key, timeout_secs = self.timeout.as_secs(), "Storage delete timed out");
                Err(AppError::StorageTransient(format!(
                    "delete of {} timed out after {}s",
                    key,
                    self.timeout.as_secs()
                )))
            }
        }
    }
}
