//! Handlers for the per-signal endpoints
//!
//! Each request runs its service on a fresh task. Upstream failures are
//! already absorbed by the services; only a task failure becomes a 500.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{CropHealthRecord, DataOrigin, HealthRiskRecord, Sourced, WeatherReading};

use crate::error::AppResult;
use crate::services::AlertFeed;
use crate::AppState;

/// Envelope for signal payloads
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalResponse<T> {
    pub data: T,
    pub source: String,
    pub origin: DataOrigin,
    pub last_updated: DateTime<Utc>,
}

impl<T> SignalResponse<T> {
    pub fn new(sourced: Sourced<T>, last_updated: DateTime<Utc>) -> Self {
        Self {
            data: sourced.data,
            source: sourced.source,
            origin: sourced.origin,
            last_updated,
        }
    }
}

/// Alerts carry a list of feeds instead of a single source
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsResponse {
    #[serde(flatten)]
    pub feed: AlertFeed,
    pub last_updated: DateTime<Utc>,
}

/// Synthetic weather for every district
pub async fn get_weather(
    State(state): State<AppState>,
) -> AppResult<Json<SignalResponse<Vec<WeatherReading>>>> {
    let service = state.services.weather.clone();
    let now = Utc::now();
    let readings = tokio::spawn(async move { service.current_readings(now) }).await?;
    Ok(Json(SignalResponse::new(readings, now)))
}

/// Seismic, flood and thunderstorm alerts
pub async fn get_alerts(State(state): State<AppState>) -> AppResult<Json<AlertsResponse>> {
    let service = state.services.alerts.clone();
    let now = Utc::now();
    let feed = tokio::spawn(async move { service.collect(now).await }).await?;
    Ok(Json(AlertsResponse {
        feed,
        last_updated: now,
    }))
}

/// Disease outbreak risk per district
pub async fn get_health_risks(
    State(state): State<AppState>,
) -> AppResult<Json<SignalResponse<Vec<HealthRiskRecord>>>> {
    let service = state.services.health.clone();
    let now = Utc::now();
    let records = tokio::spawn(async move { service.health_risks(now).await }).await?;
    Ok(Json(SignalResponse::new(records, now)))
}

/// Crop health per agricultural district
pub async fn get_crops(
    State(state): State<AppState>,
) -> AppResult<Json<SignalResponse<Vec<CropHealthRecord>>>> {
    let service = state.services.crops.clone();
    let now = Utc::now();
    let records = tokio::spawn(async move { service.crop_health(now).await }).await?;
    Ok(Json(SignalResponse::new(records, now)))
}
