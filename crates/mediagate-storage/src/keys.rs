//! Storage key derivation.
//!
//! Key format: `{folder}/{token}.{ext}`. The folder has already passed the
//! allow-list check, the token is random per request, and the extension comes
//! from the validated content type rather than the client filename.

use mediagate_core::MediaType;
use uuid::Uuid;

/// Compose a storage key from its three segments. Pure; no uniqueness claims.
pub fn compose_key(folder: &str, token: &str, extension: &str) -> String {
    format!("{}/{}.{}", folder, token, extension)
}

/// Derive a fresh storage key for a validated upload.
///
/// The token is a UUID v4, so concurrent requests at the same instant cannot
/// collide the way timestamp-only tokens can.
pub fn derive_key(folder: &str, media_type: MediaType) -> String {
    let token = Uuid::new_v4().simple().to_string();
    compose_key(folder, &token, media_type.extension())
}
