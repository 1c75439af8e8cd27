//! Route definitions for the AETHER monitor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Signal endpoints (on demand, bypass the poller)
        .route("/weather", get(handlers::get_weather))
        .route("/alerts", get(handlers::get_alerts))
        .route("/health", get(handlers::get_health_risks))
        .route("/crops", get(handlers::get_crops))
        .route("/forecast", get(handlers::get_forecast))
        // Advisory generator
        .route("/reasoning", post(handlers::post_reasoning))
        // Poller snapshot
        .nest("/dashboard", dashboard_routes())
}

/// Dashboard snapshot routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/refresh", post(handlers::refresh_dashboard))
}
