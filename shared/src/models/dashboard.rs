//! Dashboard snapshot and derived summary

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CropHealth, CropHealthRecord, DisasterAlert, HealthRiskRecord, WeatherReading};
use crate::types::ConnectionStatus;

/// Count of districts per crop-health class
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropHealthSummary {
    pub critical: usize,
    pub stressed: usize,
    pub good: usize,
    pub excellent: usize,
}

impl CropHealthSummary {
    pub fn from_records(records: &[CropHealthRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                match record.crop_health {
                    CropHealth::Critical => summary.critical += 1,
                    CropHealth::Stressed => summary.stressed += 1,
                    CropHealth::Good => summary.good += 1,
                    CropHealth::Excellent => summary.excellent += 1,
                }
                summary
            })
    }
}

/// Figures the dashboard header and map overlay display
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub rainfall_by_district: BTreeMap<String, f64>,
    pub alerts_by_district: BTreeMap<String, Vec<DisasterAlert>>,
    pub average_rainfall: f64,
    pub average_temperature: f64,
    pub critical_alerts: Vec<DisasterAlert>,
    pub active_alerts_count: usize,
    pub monitored_districts_count: usize,
    pub crop_health_summary: CropHealthSummary,
}

impl DashboardSummary {
    pub fn derive(
        weather: &[WeatherReading],
        alerts: &[DisasterAlert],
        crops: &[CropHealthRecord],
    ) -> Self {
        let rainfall_by_district = weather
            .iter()
            .map(|w| (w.district.clone(), w.rainfall_mm))
            .collect();

        let mut alerts_by_district: BTreeMap<String, Vec<DisasterAlert>> = BTreeMap::new();
        for alert in alerts {
            alerts_by_district
                .entry(alert.district.clone())
                .or_default()
                .push(alert.clone());
        }

        let (average_rainfall, average_temperature) = if weather.is_empty() {
            (0.0, 0.0)
        } else {
            let n = weather.len() as f64;
            (
                weather.iter().map(|w| w.rainfall_mm).sum::<f64>() / n,
                weather.iter().map(|w| w.temperature_celsius).sum::<f64>() / n,
            )
        };

        Self {
            rainfall_by_district,
            alerts_by_district,
            average_rainfall,
            average_temperature,
            critical_alerts: alerts
                .iter()
                .filter(|a| a.severity.is_urgent())
                .cloned()
                .collect(),
            active_alerts_count: alerts.len(),
            monitored_districts_count: weather.len(),
            crop_health_summary: CropHealthSummary::from_records(crops),
        }
    }
}

/// Result of one polling cycle, replaced wholesale by the next
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// `None` until the first cycle completes
    pub cycle_id: Option<Uuid>,
    pub weather: Vec<WeatherReading>,
    pub alerts: Vec<DisasterAlert>,
    pub health: Vec<HealthRiskRecord>,
    pub crops: Vec<CropHealthRecord>,
    pub sources: Vec<String>,
    pub summary: DashboardSummary,
    pub status: ConnectionStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardSnapshot {
    /// Placeholder shown before the first cycle finishes
    pub fn empty() -> Self {
        Self {
            cycle_id: None,
            weather: Vec::new(),
            alerts: Vec::new(),
            health: Vec::new(),
            crops: Vec::new(),
            sources: Vec::new(),
            summary: DashboardSummary::default(),
            status: ConnectionStatus::Reconnecting,
            last_updated: None,
        }
    }

    /// Same data, different status
    pub fn with_status(&self, status: ConnectionStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
