//! Mediagate core library
//!
//! Shared building blocks for the media ingestion gateway: configuration,
//! the error taxonomy, the content-type allow-list, and the request/response
//! models exchanged over the API. This crate performs no I/O.

pub mod config;
pub mod error;
pub mod media_type;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use media_type::MediaType;
pub use storage_types::StorageBackend;
