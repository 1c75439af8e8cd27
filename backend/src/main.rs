//! AETHER Maharashtra Monitor - Backend Server
//!
//! Serves weather, seismic, crop and health risk signals for Maharashtra
//! districts and keeps a dashboard snapshot fresh with a background poller.

use std::net::SocketAddr;

use aether_backend::{create_app, services::Poller, AppState, Config};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "aether_server=debug,aether_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AETHER Maharashtra Monitor");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::new(config.clone())?;
    let shutdown = CancellationToken::new();

    let poller = if config.polling.enabled {
        let poller = Poller::new(
            state.services.clone(),
            state.snapshots.clone(),
            state.refresh.clone(),
            config.polling.interval(),
        );
        Some(tokio::spawn(poller.run(shutdown.clone())))
    } else {
        tracing::info!("Polling disabled; /api/dashboard will stay empty");
        None
    };

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    if let Some(handle) = poller {
        handle.await?;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, cancelling the poller and any in-flight cycle
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
    shutdown.cancel();
}
