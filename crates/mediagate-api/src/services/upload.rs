//! Upload orchestrator.
//!
//! Pipeline: validate the received file, derive a storage key from the
//! validated content type, write the object with a bounded timeout, return
//! the stored object. Exactly one object is written on the success path and
//! none on any rejection path; a failed request can always be retried by the
//! caller because a retry derives a fresh key.

use std::sync::Arc;
use std::time::Duration;

use mediagate_core::models::StoredObject;
use mediagate_core::AppError;
use mediagate_storage::{derive_key, Storage};

use crate::state::{AppState, UploadPolicy};
use crate::validation::{validate_upload, ReceivedFile};

use super::reclassify_storage_error;

pub struct UploadService {
    storage: Arc<dyn Storage>,
    policy: UploadPolicy,
    timeout: Duration,
}

impl UploadService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            policy: state.policy.clone(),
            timeout: state.storage_timeout,
        }
    }

    pub fn with_parts(storage: Arc<dyn Storage>, policy: UploadPolicy, timeout: Duration) -> Self {
        Self {
            storage,
            policy,
            timeout,
        }
    }

    /// Run one upload through the pipeline.
    #[tracing::instrument(skip(self, file), fields(folder = %folder))]
    pub async fn upload(
        &self,
        file: Option<ReceivedFile>,
        folder: &str,
    ) -> Result<StoredObject, AppError> {
        let validated = validate_upload(file, folder, &self.policy)?;

        let key = derive_key(&validated.folder, validated.media_type);
        let content_type = validated.media_type.content_type();
        let size = validated.data.len() as u64;

        let put = self.storage.put(&key, validated.data, content_type);
        let url = match tokio::time::timeout(self.timeout, put).await {
            Ok(Ok(url)) => url,
            Ok(Err(e)) => return Err(reclassify_storage_error(e)),
            Err(_) => {
                tracing::warn!(key = %key, timeout_secs = self.timeout.as_secs(), "Storage put timed out");
                return Err(AppError::StorageTransient(format!(
                    "put of {} timed out after {}s",
                    key,
                    self.timeout.as_secs()
                )));
            }
        };

        tracing::info!(
            key = %key,
            url = %url,
            content_type = %content_type,
            size_bytes = size,
            "Upload stored"
        );

        Ok(StoredObject {
            key,
            url,
            content_type: content_type.to_string(),
            size,
        })
    }
}
