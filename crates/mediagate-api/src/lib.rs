//! Mediagate API library
//!
//! This crate provides the HTTP handlers, the upload/delete orchestrators,
//! and application setup for the media ingestion gateway.

// Module declarations
mod api_doc;
mod handlers;
pub mod services;
pub mod setup;
pub mod telemetry;
pub mod validation;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
