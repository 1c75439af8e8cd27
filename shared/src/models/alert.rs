//! Disaster alert models and severity rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RiskLevel;

/// Precipitation above which a flood alert is raised (mm)
pub const FLOOD_ALERT_MM: f64 = 50.0;
/// Precipitation above which a flood alert becomes critical (mm)
pub const FLOOD_CRITICAL_MM: f64 = 100.0;
/// WMO codes 95..=99 are thunderstorms
pub const THUNDERSTORM_CODE: u8 = 95;
/// Thunderstorm with heavy hail
pub const SEVERE_THUNDERSTORM_CODE: u8 = 99;

/// A transient alert generated during one poll cycle
///
/// Alerts are neither persisted nor deduplicated: a flood alert for the same
/// district reappears with a new id every cycle while conditions persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisasterAlert {
    pub id: String,
    pub title: String,
    pub district: String,
    pub severity: RiskLevel,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    /// Epicentre `[longitude, latitude, depth_km]` for seismic alerts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
}

/// Kinds of disaster alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Flood,
    Cyclone,
    Earthquake,
    Heatwave,
    Outbreak,
    Drought,
}

/// Seismic severity: magnitude ≥5 critical, ≥4 high, anything smaller medium
pub fn seismic_severity(magnitude: f64) -> RiskLevel {
    if magnitude >= 5.0 {
        RiskLevel::Critical
    } else if magnitude >= 4.0 {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

/// Flood severity for the current precipitation, if it warrants an alert
pub fn flood_severity(precipitation_mm: f64) -> Option<RiskLevel> {
    if precipitation_mm > FLOOD_CRITICAL_MM {
        Some(RiskLevel::Critical)
    } else if precipitation_mm > FLOOD_ALERT_MM {
        Some(RiskLevel::High)
    } else {
        None
    }
}

/// Thunderstorm severity for a WMO weather code, if it indicates a storm
pub fn storm_severity(weather_code: u8) -> Option<RiskLevel> {
    if weather_code >= SEVERE_THUNDERSTORM_CODE {
        Some(RiskLevel::High)
    } else if weather_code >= THUNDERSTORM_CODE {
        Some(RiskLevel::Medium)
    } else {
        None
    }
}

impl DisasterAlert {
    /// Heavy-rain alert for a district, or `None` below the flood threshold
    pub fn flood(
        district: &str,
        precipitation_mm: f64,
        source: &str,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let severity = flood_severity(precipitation_mm)?;
        Some(Self {
            id: format!("rain-{}-{}", district, now.timestamp_millis()),
            title: "Heavy Rainfall Warning".to_string(),
            district: district.to_string(),
            severity,
            alert_type: AlertType::Flood,
            description: format!(
                "Heavy rainfall of {}mm recorded. Risk of waterlogging in low-lying areas.",
                precipitation_mm
            ),
            timestamp: now,
            source: source.to_string(),
            coordinates: None,
        })
    }

    /// Thunderstorm alert for a district, or `None` for non-storm codes
    pub fn thunderstorm(
        district: &str,
        weather_code: u8,
        source: &str,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let severity = storm_severity(weather_code)?;
        Some(Self {
            id: format!("storm-{}-{}", district, now.timestamp_millis()),
            title: "Thunderstorm Alert".to_string(),
            district: district.to_string(),
            severity,
            alert_type: AlertType::Cyclone,
            description: "Thunderstorm activity detected. Stay indoors and avoid open areas."
                .to_string(),
            timestamp: now,
            source: source.to_string(),
            coordinates: None,
        })
    }
}
