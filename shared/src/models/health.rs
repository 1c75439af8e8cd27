//! Public-health risk models
//!
//! Disease risk is a stateless function of (temperature, humidity, coastal).
//! Vector-borne thresholds follow Anopheles (malaria) and Aedes (dengue)
//! breeding conditions; heat stroke keys off a humidity-adjusted feels-like.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::clamp_percent;

/// Bonus malaria risk applied to coastal districts
const COASTAL_MALARIA_BONUS: f64 = 15.0;

/// Per-disease risk percentages, each in [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRisk {
    pub malaria: u8,
    pub dengue: u8,
    pub heat_stroke: u8,
}

impl DiseaseRisk {
    /// Weighted composite: malaria 35%, dengue 40%, heat stroke 25%
    pub fn outbreak_risk(&self) -> u8 {
        let weighted = f64::from(self.malaria) * 0.35
            + f64::from(self.dengue) * 0.40
            + f64::from(self.heat_stroke) * 0.25;
        to_percent(weighted)
    }
}

fn to_percent(value: f64) -> u8 {
    clamp_percent(value).round() as u8
}

/// Feels-like temperature used by the heat-stroke rule
pub fn heat_stress_feels_like(temperature_celsius: f64, humidity_percent: f64) -> f64 {
    let humidity_load = if humidity_percent > 70.0 {
        (humidity_percent - 70.0) * 0.2
    } else {
        0.0
    };
    temperature_celsius + humidity_load
}

/// Classify malaria, dengue and heat-stroke risk
pub fn classify_disease_risk(
    temperature_celsius: f64,
    humidity_percent: f64,
    is_coastal: bool,
) -> DiseaseRisk {
    let temp = temperature_celsius;
    let humidity = humidity_percent;

    let malaria = if humidity > 70.0 && (20.0..=35.0).contains(&temp) {
        let coastal_bonus = if is_coastal { COASTAL_MALARIA_BONUS } else { 0.0 };
        ((humidity - 50.0) * 1.5 + coastal_bonus).min(100.0)
    } else if humidity > 60.0 {
        (humidity - 50.0) * 0.8
    } else {
        0.0
    };

    let dengue = if humidity > 75.0 && (25.0..=32.0).contains(&temp) {
        let warm_bonus = if temp > 28.0 { 20.0 } else { 0.0 };
        ((humidity - 60.0) * 2.0 + warm_bonus).min(100.0)
    } else if humidity > 65.0 {
        (humidity - 55.0) * 1.2
    } else {
        0.0
    };

    let feels_like = heat_stress_feels_like(temp, humidity);
    let heat_stroke = if feels_like > 42.0 {
        90.0
    } else if feels_like > 38.0 {
        60.0
    } else if feels_like > 35.0 {
        35.0
    } else if temp > 32.0 {
        20.0
    } else {
        0.0
    };

    DiseaseRisk {
        malaria: to_percent(malaria),
        dengue: to_percent(dengue),
        heat_stroke: to_percent(heat_stroke),
    }
}

/// Dashboard label for a composite outbreak risk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthCondition {
    Normal,
    Elevated,
    Warning,
    Critical,
}

impl HealthCondition {
    pub fn from_outbreak_risk(outbreak_risk: u8) -> Self {
        match outbreak_risk {
            71..=u8::MAX => HealthCondition::Critical,
            51..=70 => HealthCondition::Warning,
            36..=50 => HealthCondition::Elevated,
            _ => HealthCondition::Normal,
        }
    }
}

/// Indicators shown next to a district's health card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthIndicators {
    pub temperature: f64,
    pub humidity: f64,
    pub feels_like: f64,
}

/// Apparent temperature displayed on the dashboard (rounded °C)
pub fn apparent_temperature(temperature_celsius: f64, humidity_percent: f64) -> f64 {
    let humid = if humidity_percent > 70.0 { 4.0 } else { 0.0 };
    let scorching = if temperature_celsius > 35.0 { 3.0 } else { 0.0 };
    (temperature_celsius + humid + scorching).round()
}

/// Health risk assessment for one district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRiskRecord {
    pub district: String,
    pub outbreak_risk: u8,
    pub condition: HealthCondition,
    pub disease_risk: DiseaseRisk,
    pub health_indicators: HealthIndicators,
    pub last_updated: DateTime<Utc>,
}

impl HealthRiskRecord {
    /// Build the record for a district from its current temperature and humidity
    pub fn assess(
        district: &str,
        temperature_celsius: f64,
        humidity_percent: f64,
        is_coastal: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let disease_risk = classify_disease_risk(temperature_celsius, humidity_percent, is_coastal);
        let outbreak_risk = disease_risk.outbreak_risk();

        Self {
            district: district.to_string(),
            outbreak_risk,
            condition: HealthCondition::from_outbreak_risk(outbreak_risk),
            disease_risk,
            health_indicators: HealthIndicators {
                temperature: temperature_celsius.round(),
                humidity: humidity_percent.round(),
                feels_like: apparent_temperature(temperature_celsius, humidity_percent),
            },
            last_updated: now,
        }
    }
}
