//! Focus Timer - A state-managed HTTP server driving a Pomodoro focus countdown
//!
//! This is the main entry point for the focus-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{countdown_task, display_task, notifier_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-timer server v1.0.0");
    info!("Configuration: host={}, port={}, focus interval=25min",
          config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the background tasks: tick source plus the two event subscribers
    tokio::spawn(countdown_task(Arc::clone(&state)));
    tokio::spawn(display_task(Arc::clone(&state)));
    tokio::spawn(notifier_task(Arc::clone(&state)));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start the focus countdown");
    info!("  POST /pause  - Pause and rewind the countdown");
    info!("  POST /reset  - Reset the countdown and cycle count");
    info!("  GET  /status - Timer state and the latest rendered frame");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
