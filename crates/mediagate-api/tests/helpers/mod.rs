//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p mediagate-api --test uploads_test` or
//! `cargo test -p mediagate-api`. Uses local storage in a temp directory.

pub mod fixtures;

use axum_test::TestServer;
use mediagate_api::setup::routes;
use mediagate_api::state::AppState;
use mediagate_core::config::{BaseConfig, GatewayConfig};
use mediagate_core::{Config, StorageBackend};
use mediagate_storage::{LocalStorage, Storage, StoreIdentity};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:5000/media";

/// Test application: server and owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub storage_path: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Whether the object for `key` exists on disk.
    pub fn stored(&self, key: &str) -> bool {
        self.storage_path.join(key).is_file()
    }

    /// Number of files currently stored, across all folders.
    pub fn stored_count(&self) -> usize {
        fn walk(dir: &std::path::Path, count: &mut usize) {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.is_dir() {
                        walk(&path, count);
                    } else {
                        *count += 1;
                    }
                }
            }
        }
        let mut count = 0;
        walk(&self.storage_path, &mut count);
        count
    }
}

/// Setup test app with isolated local storage.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(create_test_config).await
}

/// Setup test app with a customized config.
pub async fn setup_test_app_with(make_config: fn(&str) -> Config) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage_path = temp_dir.path().to_path_buf();

    let config = make_config(storage_path.to_str().expect("utf-8 temp path"));
    config.validate().expect("test config should validate");

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(storage_path.clone(), TEST_BASE_URL.to_string())
            .await
            .expect("Failed to create local storage"),
    );
    let identity = StoreIdentity::from_config(&config).expect("Failed to build store identity");

    let state = Arc::new(AppState::new(config.clone(), storage, identity));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage_path,
        _temp_dir: temp_dir,
    }
}

pub fn create_test_config(storage_path: &str) -> Config {
    let base = BaseConfig {
        server_port: 5000,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    };
    Config(Box::new(GatewayConfig {
        base,
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: Some(storage_path.to_string()),
        local_storage_base_url: Some(TEST_BASE_URL.to_string()),
        storage_timeout_secs: 30,
        allowed_folders: vec![
            "earrings".to_string(),
            "rings".to_string(),
            "necklaces".to_string(),
        ],
        max_file_size_bytes: 10 * 1024 * 1024,
    }))
}
