use se_server::logger::{self, LogSink};
use se_server::{AppState, build_router};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = se_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        LogSink::new(log_file_path, config.logging.colored),
    )?;

    info!("Starting se-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // A signing failure here is fatal
    let app_state = AppState::from_config(&config)?;
    info!(
        "Credential issuer ready: {} scopes, audience {}",
        app_state.catalog.len(),
        app_state.issuer.audience()
    );

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be stopped externally
            std::future::pending::<()>().await;
        }
    }
}
