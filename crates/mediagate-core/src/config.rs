//! Configuration module
//!
//! Configuration is loaded once at startup from the environment and injected
//! into the orchestrators explicitly; nothing reads process-wide state at
//! request time.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;

/// Base configuration shared by every deployment
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Gateway configuration: storage identity, allow-lists, and ceilings.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base: BaseConfig,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    /// Bounded timeout for a single put or delete against the store.
    pub storage_timeout_secs: u64,
    // Upload policy
    pub allowed_folders: Vec<String>,
    pub max_file_size_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<GatewayConfig>);

impl Config {
    fn as_gateway(&self) -> &GatewayConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = GatewayConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.as_gateway().base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.as_gateway().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_gateway().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_gateway().base.environment
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.as_gateway().storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.as_gateway().s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.as_gateway().s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.as_gateway().s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.as_gateway().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.as_gateway().local_storage_base_url.as_deref()
    }

    pub fn storage_timeout_secs(&self) -> u64 {
        self.as_gateway().storage_timeout_secs
    }

    pub fn allowed_folders(&self) -> &[String] {
        &self.as_gateway().allowed_folders
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_gateway().max_file_size_bytes
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_gateway().validate()
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| StorageBackend::from_str(&s))
            .transpose()?
            .unwrap_or(StorageBackend::S3);

        let allowed_folders = env::var("ALLOWED_FOLDERS")
            .unwrap_or_default()
            .split(',')
            .map(normalize_folder)
            .filter(|s| !s.is_empty())
            .collect();

        let max_file_size_bytes = env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
            * 1024
            * 1024;

        let storage_timeout_secs = env::var("STORAGE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_STORAGE_TIMEOUT_SECS);

        Ok(GatewayConfig {
            base: BaseConfig {
                server_port,
                cors_origins,
                environment,
            },
            storage_backend,
            s3_bucket: env::var("AWS_BUCKET_NAME").ok(),
            s3_region: env::var("S3_REGION").or_else(|_| env::var("AWS_REGION")).ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            storage_timeout_secs,
            allowed_folders,
            max_file_size_bytes,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.allowed_folders.is_empty() {
            anyhow::bail!("ALLOWED_FOLDERS must list at least one folder");
        }
        if self.max_file_size_bytes == 0 {
            anyhow::bail!("MAX_FILE_SIZE_MB must be greater than zero");
        }
        if self.storage_timeout_secs == 0 {
            anyhow::bail!("STORAGE_TIMEOUT_SECS must be greater than zero");
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    anyhow::bail!("AWS_BUCKET_NAME not configured");
                }
                if self.s3_region.is_none() && self.s3_endpoint.is_none() {
                    anyhow::bail!("S3_REGION (or AWS_REGION) not configured");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    anyhow::bail!("LOCAL_STORAGE_PATH not configured");
                }
                if self.local_storage_base_url.is_none() {
                    anyhow::bail!("LOCAL_STORAGE_BASE_URL not configured");
                }
            }
        }

        Ok(())
    }
}

/// Folder names are compared after trimming and lower-casing; normalize once
/// at load so membership checks stay exact.
pub fn normalize_folder(folder: &str) -> String {
    folder.trim().to_lowercase()
}
