//! AETHER Maharashtra Monitor - Backend
//!
//! Aggregates public weather, seismic, soil and derived health signals for
//! Maharashtra districts and serves them to the dashboard. Upstream failures
//! are absorbed by fallback data; see `services`.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Notify;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::{Services, SnapshotStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub services: Services,
    pub snapshots: Arc<SnapshotStore>,
    /// Wakes the poller for an immediate cycle
    pub refresh: Arc<Notify>,
}

impl AppState {
    /// Build the state, with one HTTP client shared by every upstream
    pub fn new(config: Config) -> AppResult<Self> {
        let client = external::http_client(config.sources.request_timeout())
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let services = Services::new(client, &config);

        Ok(Self {
            config: Arc::new(config),
            services,
            snapshots: Arc::new(SnapshotStore::new()),
            refresh: Arc::new(Notify::new()),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // The dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
