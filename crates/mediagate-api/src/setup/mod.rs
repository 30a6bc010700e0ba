//! Application setup and initialization
//!
//! All application initialization logic lives here rather than in main.rs.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use mediagate_core::Config;
use mediagate_storage::StoreIdentity;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated");

    // Setup storage and the identity the delete-safety check matches against
    let storage = mediagate_storage::create_storage(&config).await?;
    let identity = StoreIdentity::from_config(&config)?;

    tracing::info!(
        backend = %storage.backend_type(),
        store_base = %identity.base_url(),
        "Storage initialized"
    );

    let state = Arc::new(AppState::new(config.clone(), storage, identity));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
