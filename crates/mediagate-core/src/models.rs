//! Request and response models exchanged over the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful upload response: the durable public URL and the storage key
/// it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub key: String,
}

/// Delete request body: the URL returned by a previous upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub url: String,
}

/// Delete response; deleting an already-absent object is still a success.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

/// An object as stored: key, public URL, canonical content type and size.
/// Owned by the external store; this is the gateway's view of it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
    pub content_type: String,
    pub size: u64,
}

impl UploadResponse {
    pub fn from_stored(object: &StoredObject) -> Self {
        Self {
            success: true,
            url: object.url.clone(),
            key: object.key.clone(),
        }
    }
}
