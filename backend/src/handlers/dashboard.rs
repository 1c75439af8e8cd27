//! Dashboard snapshot handlers

use axum::{extract::State, http::StatusCode, Json};
use shared::DashboardSnapshot;
use tracing::info;

use crate::AppState;

/// Latest completed polling cycle
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    let snapshot = state.snapshots.current().await;
    Json(snapshot.as_ref().clone())
}

/// Ask the poller for an immediate cycle, superseding any in flight
pub async fn refresh_dashboard(State(state): State<AppState>) -> StatusCode {
    info!("Dashboard refresh requested");
    state.refresh.notify_one();
    StatusCode::ACCEPTED
}
