//! Upload validation.
//!
//! Checks run in a fixed order and the first failure wins: file present,
//! content type in the allow-list, size within the ceiling, folder in the
//! allow-list. Nothing here touches storage; a rejected request leaves no
//! trace.

use bytes::Bytes;
use mediagate_core::{config::normalize_folder, AppError, MediaType};

use crate::state::UploadPolicy;

/// A file as received from the multipart body, before validation.
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub data: Bytes,
    /// Declared Content-Type of the file part.
    pub content_type: String,
    /// Client-supplied filename; kept for logging only, never trusted for
    /// extension or key derivation.
    pub filename: Option<String>,
}

/// A validated upload: normalized folder and resolved media type.
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub data: Bytes,
    pub media_type: MediaType,
    pub folder: String,
}

/// Validate a received upload against the injected policy.
pub fn validate_upload(
    file: Option<ReceivedFile>,
    folder: &str,
    policy: &UploadPolicy,
) -> Result<ValidatedUpload, AppError> {
    let file = match file {
        Some(file) if !file.data.is_empty() => file,
        _ => return Err(AppError::MissingFile),
    };

    let media_type = MediaType::from_content_type(&file.content_type)
        .ok_or_else(|| AppError::UnsupportedMediaType(file.content_type.clone()))?;

    if file.data.len() > policy.max_file_size {
        return Err(AppError::PayloadTooLarge {
            size: file.data.len(),
            limit: policy.max_file_size,
        });
    }

    let folder = normalize_folder(folder);
    if !policy.is_allowed_folder(&folder) {
        return Err(AppError::InvalidFolder(folder));
    }

    Ok(ValidatedUpload {
        data: file.data,
        media_type,
        folder,
    })
}
