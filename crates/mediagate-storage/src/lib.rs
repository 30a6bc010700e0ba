//! Mediagate storage library
//!
//! Storage abstraction and backends for the ingestion gateway: the `Storage`
//! trait, an S3 backend, a local filesystem backend, key derivation, and the
//! store-identity model used by the delete-safety check.
//!
//! # Storage key format
//!
//! Keys are `{folder}/{token}.{ext}`: a validated folder from the configured
//! allow-list, a per-request random token, and an extension derived from the
//! validated content type. Keys must not contain `..` or a leading `/`.
//! Key derivation is centralized in the `keys` module so every backend and
//! the identity check stay consistent.

pub mod factory;
pub mod identity;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use identity::StoreIdentity;
pub use keys::{compose_key, derive_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mediagate_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
