//! Error types module
//!
//! This module provides the core error taxonomy used throughout the gateway.
//! All errors are unified under the `AppError` enum: validation rejections
//! (client-caused), the delete-safety authorization rejection, storage
//! failures split into transient and permanent, and unexpected internal
//! errors.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_TRANSIENT")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried by the caller)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("File not received")]
    MissingFile,

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("URL does not belong to the configured store: {0}")]
    ForbiddenUrl(String),

    #[error("Transient storage error: {0}")]
    StorageTransient(String),

    #[error("Storage error: {0}")]
    StoragePermanent(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
/// Reduces duplication in the ErrorMetadata impl; client_message stays per-variant for dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::MissingFile => (
            400,
            "MISSING_FILE",
            false,
            Some("Attach a file under the 'file' multipart field"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedMediaType(_) => (
            400,
            "UNSUPPORTED_MEDIA_TYPE",
            false,
            Some("Upload a JPEG, PNG, WEBP, MP4 or WEBM file"),
            false,
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge { .. } => (
            400,
            "PAYLOAD_TOO_LARGE",
            false,
            Some("Reduce file size and try again"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidFolder(_) => (
            400,
            "INVALID_FOLDER",
            false,
            Some("Use one of the configured folders"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidUrl(_) => (
            400,
            "INVALID_URL",
            false,
            Some("Provide the URL returned by a previous upload"),
            false,
            LogLevel::Debug,
        ),
        AppError::BadRequest(_) => (
            400,
            "BAD_REQUEST",
            false,
            Some("Check request format and parameters"),
            false,
            LogLevel::Debug,
        ),
        AppError::ForbiddenUrl(_) => (
            403,
            "FORBIDDEN_URL",
            false,
            Some("Only URLs issued by this service can be deleted"),
            false,
            LogLevel::Warn,
        ),
        AppError::StorageTransient(_) => (
            500,
            "STORAGE_TRANSIENT",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::StoragePermanent(_) => (
            500,
            "STORAGE_ERROR",
            false,
            Some("Contact support if this error persists"),
            true,
            LogLevel::Error,
        ),
        AppError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::InternalWithSource { .. } => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::PayloadTooLarge { .. } => "PayloadTooLarge",
            AppError::InvalidFolder(_) => "InvalidFolder",
            AppError::InvalidUrl(_) => "InvalidUrl",
            AppError::BadRequest(_) => "BadRequest",
            AppError::ForbiddenUrl(_) => "ForbiddenUrl",
            AppError::StorageTransient(_) => "StorageTransient",
            AppError::StoragePermanent(_) => "StoragePermanent",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "File not received".to_string(),
            AppError::UnsupportedMediaType(_) => {
                "Only JPG, PNG, WEBP, MP4, WEBM allowed".to_string()
            }
            AppError::PayloadTooLarge { size, limit } => {
                format!("File too large: {} bytes exceeds limit of {} bytes", size, limit)
            }
            AppError::InvalidFolder(ref folder) => format!("Invalid folder: {}", folder),
            AppError::InvalidUrl(ref msg) => msg.clone(),
            AppError::BadRequest(ref msg) => msg.clone(),
            AppError::ForbiddenUrl(_) => "Invalid S3 URL".to_string(),
            AppError::StorageTransient(_) => "Upload service temporarily unavailable".to_string(),
            AppError::StoragePermanent(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_invalid_folder() {
        let err = AppError::InvalidFolder("unknown".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_FOLDER");
        assert!(!err.is_recoverable());
        assert_eq!(err.client_message(), "Invalid folder: unknown");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_forbidden_url() {
        let err = AppError::ForbiddenUrl("https://other-bucket.s3.amazonaws.com/x".to_string());
        assert_eq!(err.http_status_code(), 403);
        assert_eq!(err.error_code(), "FORBIDDEN_URL");
        assert_eq!(err.client_message(), "Invalid S3 URL");
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_error_metadata_storage_transient() {
        let err = AppError::StorageTransient("timed out".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_recoverable());
        assert!(err.is_sensitive());
        assert_eq!(err.suggested_action(), Some("Retry after a short delay"));
    }

    #[test]
    fn test_client_message_hides_storage_detail() {
        let err = AppError::StoragePermanent("access denied on bucket xyz".to_string());
        assert!(!err.client_message().contains("xyz"));
    }

    #[test]
    fn test_payload_too_large_message() {
        let err = AppError::PayloadTooLarge {
            size: 20_000_000,
            limit: 10_485_760,
        };
        assert_eq!(err.http_status_code(), 400);
        assert!(err.client_message().contains("20000000"));
        assert!(err.client_message().contains("10485760"));
    }
}
