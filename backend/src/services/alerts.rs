//! Disaster alerts from seismic and precipitation signals
//!
//! Seismic alerts come from USGS; heavy-rain and thunderstorm alerts come
//! from Open-Meteo current conditions for the alert districts. Neither path
//! fabricates data on failure: a failed source contributes no alerts.

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use shared::{alert_districts, seismic_severity, AlertType, DataOrigin, DisasterAlert, District, Sourced};
use tracing::{debug, warn};

use crate::config::SeismicConfig;
use crate::external::open_meteo::OPEN_METEO_SOURCE;
use crate::external::usgs::{SeismicEvent, USGS_SOURCE};
use crate::external::{OpenMeteoClient, UsgsClient};

pub const SEISMIC_FEED_LABEL: &str = "USGS Earthquake API";
pub const WEATHER_FEED_LABEL: &str = "Open-Meteo Weather API";

/// Combined alert list with the feeds that were consulted
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertFeed {
    pub alerts: Vec<DisasterAlert>,
    pub sources: Vec<String>,
    /// `fallback` when any feed failed and contributed nothing
    pub origin: DataOrigin,
}

/// Alert signal service
#[derive(Clone)]
pub struct AlertService {
    usgs: UsgsClient,
    open_meteo: OpenMeteoClient,
    seismic: SeismicConfig,
}

impl AlertService {
    pub fn new(usgs: UsgsClient, open_meteo: OpenMeteoClient, seismic: SeismicConfig) -> Self {
        Self {
            usgs,
            open_meteo,
            seismic,
        }
    }

    /// Seismic and weather alerts, fetched concurrently
    pub async fn collect(&self, now: DateTime<Utc>) -> AlertFeed {
        let (seismic, weather) = tokio::join!(self.seismic_alerts(), self.weather_alerts(now));

        let origin = if seismic.is_fallback() || weather.is_fallback() {
            DataOrigin::Fallback
        } else {
            DataOrigin::Live
        };

        let mut alerts = seismic.data;
        alerts.extend(weather.data);

        AlertFeed {
            alerts,
            sources: vec![SEISMIC_FEED_LABEL.to_string(), WEATHER_FEED_LABEL.to_string()],
            origin,
        }
    }

    /// Recent earthquakes in the configured region; empty on failure
    pub async fn seismic_alerts(&self) -> Sourced<Vec<DisasterAlert>> {
        match self.usgs.recent_events(&self.seismic).await {
            Ok(events) => {
                debug!(count = events.len(), "Fetched seismic events");
                Sourced::live(events.into_iter().map(earthquake_alert).collect(), USGS_SOURCE)
            }
            Err(err) => {
                warn!(source = USGS_SOURCE, error = %err, "Seismic fetch failed, no earthquake alerts");
                Sourced::fallback(Vec::new(), USGS_SOURCE)
            }
        }
    }

    /// Heavy-rain and thunderstorm alerts for the alert districts.
    /// Each district is fetched independently; a failure drops only that district.
    pub async fn weather_alerts(&self, now: DateTime<Utc>) -> Sourced<Vec<DisasterAlert>> {
        let districts = alert_districts();
        let results = join_all(districts.iter().map(|d| self.district_alerts(d, now))).await;

        let failed = results.iter().filter(|r| r.is_none()).count();
        let alerts: Vec<DisasterAlert> = results.into_iter().flatten().flatten().collect();

        if failed > 0 {
            Sourced::fallback(alerts, OPEN_METEO_SOURCE)
        } else {
            Sourced::live(alerts, OPEN_METEO_SOURCE)
        }
    }

    /// `None` when the district's fetch failed
    async fn district_alerts(&self, district: &District, now: DateTime<Utc>) -> Option<Vec<DisasterAlert>> {
        match self.open_meteo.current_precipitation(district.coordinates()).await {
            Ok(current) => Some(
                [
                    DisasterAlert::flood(district.name, current.precipitation_mm, OPEN_METEO_SOURCE, now),
                    DisasterAlert::thunderstorm(district.name, current.weather_code, OPEN_METEO_SOURCE, now),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            Err(err) => {
                warn!(district = district.name, source = OPEN_METEO_SOURCE, error = %err, "Weather alert fetch failed");
                None
            }
        }
    }
}

/// Convert a USGS event into an earthquake alert
pub fn earthquake_alert(event: SeismicEvent) -> DisasterAlert {
    DisasterAlert {
        id: format!("eq-{}", event.id),
        title: event.title,
        district: event.place,
        severity: seismic_severity(event.magnitude),
        alert_type: AlertType::Earthquake,
        description: format!("Magnitude {} earthquake detected", event.magnitude),
        timestamp: event.time,
        source: USGS_SOURCE.to_string(),
        coordinates: Some(event.coordinates),
    }
}
