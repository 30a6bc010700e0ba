//! Store identity: which URLs belong to the configured store.
//!
//! The delete endpoint accepts an arbitrary URL string; before any delete is
//! issued, the URL must be proven to point into the configured store's public
//! namespace. Without this check a caller could craft a URL and have the
//! service delete any object anywhere. The match is exact on scheme, host,
//! port and the base path prefix, deliberately stricter than a
//! "host contains the bucket name" substring test.
//!
//! Scope note: after this check, any key in the configured bucket is
//! deletable. Narrowing to a caller-owned key prefix needs caller identity,
//! which this gateway does not have (authentication is out of scope).

use crate::traits::{StorageError, StorageResult};
use mediagate_core::{Config, StorageBackend};
use percent_encoding::percent_decode_str;
use url::Url;

/// The public base URL under which the configured store serves its keys.
#[derive(Debug, Clone)]
pub struct StoreIdentity {
    base: Url,
}

impl StoreIdentity {
    /// Build from an explicit public base URL (e.g.
    /// `https://media-bucket.s3.eu-west-1.amazonaws.com`).
    pub fn new(public_base_url: &str) -> StorageResult<Self> {
        let mut base = Url::parse(public_base_url)
            .map_err(|e| StorageError::ConfigError(format!("Invalid store base URL: {}", e)))?;

        if base.host_str().is_none() {
            return Err(StorageError::ConfigError(
                "Store base URL must have a host".to_string(),
            ));
        }

        // Keys are appended directly after the base path.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(StoreIdentity { base })
    }

    /// Derive the identity from configuration, mirroring the URL shapes the
    /// backends generate: virtual-hosted AWS URLs, path-style custom
    /// endpoints, or the local base URL.
    pub fn from_config(config: &Config) -> StorageResult<Self> {
        let base = match config.storage_backend() {
            StorageBackend::S3 => {
                let bucket = config.s3_bucket().ok_or_else(|| {
                    StorageError::ConfigError("AWS_BUCKET_NAME not configured".to_string())
                })?;
                match config.s3_endpoint() {
                    Some(endpoint) => {
                        format!("{}/{}/", endpoint.trim_end_matches('/'), bucket)
                    }
                    None => {
                        let region = config.s3_region().ok_or_else(|| {
                            StorageError::ConfigError(
                                "S3_REGION or AWS_REGION not configured".to_string(),
                            )
                        })?;
                        format!("https://{}.s3.{}.amazonaws.com/", bucket, region)
                    }
                }
            }
            StorageBackend::Local => {
                let base_url = config.local_storage_base_url().ok_or_else(|| {
                    StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
                })?;
                format!("{}/", base_url.trim_end_matches('/'))
            }
        };

        Self::new(&base)
    }

    /// Whether the URL points into this store's public namespace.
    pub fn owns(&self, url: &Url) -> bool {
        url.scheme() == self.base.scheme()
            && url.host_str() == self.base.host_str()
            && url.port_or_known_default() == self.base.port_or_known_default()
            && url.path().starts_with(self.base.path())
    }

    /// Extract the storage key from a URL this store owns.
    ///
    /// Returns `None` when the URL is foreign or the key is empty. Dot
    /// segments (including percent-encoded ones) are collapsed by
    /// `Url::parse` before the path reaches us, so the decoded key cannot
    /// traverse above the base path; the local backend re-checks anyway.
    pub fn key_for(&self, url: &Url) -> Option<String> {
        if !self.owns(url) {
            return None;
        }

        let remainder = &url.path()[self.base.path().len()..];
        let key = percent_decode_str(remainder).decode_utf8().ok()?;

        if key.is_empty() || key.starts_with('/') {
            return None;
        }

        Some(key.into_owned())
    }

    /// The base URL this identity matches against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediagate_core::config::{BaseConfig, GatewayConfig};

    fn identity() -> StoreIdentity {
        StoreIdentity::new("https://media-bucket.s3.eu-west-1.amazonaws.com").unwrap()
    }

    fn parse(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_owns_matching_host() {
        let id = identity();
        assert!(id.owns(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com/earrings/abc.png"
        )));
    }

    #[test]
    fn test_rejects_foreign_bucket_host() {
        let id = identity();
        assert!(!id.owns(&parse(
            "https://other-bucket.s3.eu-west-1.amazonaws.com/earrings/abc.png"
        )));
    }

    #[test]
    fn test_rejects_host_merely_containing_bucket_name() {
        // The original substring check would have accepted this.
        let id = identity();
        assert!(!id.owns(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com.evil.example/earrings/abc.png"
        )));
    }

    #[test]
    fn test_rejects_scheme_downgrade() {
        let id = identity();
        assert!(!id.owns(&parse(
            "http://media-bucket.s3.eu-west-1.amazonaws.com/earrings/abc.png"
        )));
    }

    #[test]
    fn test_key_for_extracts_and_decodes() {
        let id = identity();
        let key = id.key_for(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com/earrings/with%20space.png"
        ));
        assert_eq!(key.as_deref(), Some("earrings/with space.png"));
    }

    #[test]
    fn test_key_for_rejects_empty_key() {
        let id = identity();
        assert_eq!(
            id.key_for(&parse("https://media-bucket.s3.eu-west-1.amazonaws.com/")),
            None
        );
    }

    #[test]
    fn test_key_for_dot_segments_collapse_at_parse() {
        // Encoded dot segments never survive Url::parse, so the extracted
        // key stays inside the namespace.
        let id = identity();
        let key = id.key_for(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com/earrings/%2e%2e/secret.png"
        ));
        assert_eq!(key.as_deref(), Some("secret.png"));

        let key = id.key_for(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com/earrings/../rings/abc.png"
        ));
        assert_eq!(key.as_deref(), Some("rings/abc.png"));
    }

    #[test]
    fn test_path_style_endpoint() {
        let id = StoreIdentity::new("http://localhost:9000/media-bucket").unwrap();
        let url = parse("http://localhost:9000/media-bucket/earrings/abc.png");
        assert!(id.owns(&url));
        assert_eq!(id.key_for(&url).as_deref(), Some("earrings/abc.png"));

        // Same endpoint, different bucket segment.
        assert!(!id.owns(&parse("http://localhost:9000/other-bucket/earrings/abc.png")));
    }

    #[test]
    fn test_from_config_s3_virtual_hosted() {
        let config = Config(Box::new(GatewayConfig {
            base: BaseConfig {
                server_port: 5000,
                cors_origins: vec![],
                environment: "test".to_string(),
            },
            storage_backend: StorageBackend::S3,
            s3_bucket: Some("media-bucket".to_string()),
            s3_region: Some("eu-west-1".to_string()),
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
            storage_timeout_secs: 30,
            allowed_folders: vec!["earrings".to_string()],
            max_file_size_bytes: 10 * 1024 * 1024,
        }));

        let id = StoreIdentity::from_config(&config).unwrap();
        assert!(id.owns(&parse(
            "https://media-bucket.s3.eu-west-1.amazonaws.com/earrings/abc.png"
        )));
    }
}
