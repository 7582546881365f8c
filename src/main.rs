//! Ijtema Countdown - A state-managed HTTP server for the Salana Ijtema display
//!
//! This is the main entry point for the ijtema-countdown application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use ijtema_countdown::{
    api::create_router,
    config::Config,
    countdown::SystemClock,
    state::AppState,
    storage::FileStore,
    tasks::{spawn_countdown_ticker, TICK_PERIOD},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("ijtema_countdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting ijtema-countdown server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, target={}, cards={}, policy={}",
          config.host, config.port, config.target, config.cards, config.policy);

    let content = config.load_content().context("failed to load event content")?;
    let theme = config.choose_theme();
    info!("Using theme: {}", theme.current().unwrap_or("none"));

    let store = FileStore::open(&config.state_file);
    info!("Card index stored in {}", store.path().display());

    // Create application state
    let state = Arc::new(AppState::new(
        &config,
        Box::new(store),
        content,
        theme,
        Arc::new(SystemClock),
    ));

    // Start the countdown ticker background task
    let ticker = spawn_countdown_ticker(Arc::clone(&state), TICK_PERIOD);

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /countdown              - Latest countdown tick");
    info!("  GET  /event                  - Event content and theme");
    info!("  GET  /cards                  - Current card");
    info!("  GET  /cards/events           - Card changes (SSE)");
    info!("  POST /cards/next|previous    - Step through cards");
    info!("  POST /cards/goto/:index      - Jump to a card");
    info!("  POST /cards/swipe|scroll|click|key - Raw input events");
    info!("  GET  /status                 - Server status");
    info!("  GET  /health                 - Health check");

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

    ticker.stop().await;
    info!("Server shutdown complete");
    Ok(())
}
