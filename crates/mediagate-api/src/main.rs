use mediagate_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing before anything that logs
    mediagate_api::telemetry::init_tracing();

    // Initialize the application (storage, state, routes)
    let (_state, router) = mediagate_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    mediagate_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
