//! City forecast handler

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{CityForecast, DataOrigin};

use crate::error::AppResult;
use crate::services::forecast::DEFAULT_CITY;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    #[serde(flatten)]
    pub forecast: CityForecast,
    pub source: String,
    pub origin: DataOrigin,
    pub last_updated: DateTime<Utc>,
}

/// Multi-day forecast for `?city=` (Mumbai when absent)
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastResponse>> {
    let city = query.city.unwrap_or_else(|| DEFAULT_CITY.to_string());
    let service = state.services.forecast.clone();
    let now = Utc::now();

    let sourced = tokio::spawn(async move { service.forecast(&city, now).await }).await?;

    Ok(Json(ForecastResponse {
        forecast: sourced.data,
        source: sourced.source,
        origin: sourced.origin,
        last_updated: now,
    }))
}
