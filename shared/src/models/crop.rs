//! Crop health models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crop health classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropHealth {
    Excellent,
    Good,
    Stressed,
    Critical,
}

impl std::fmt::Display for CropHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropHealth::Excellent => write!(f, "excellent"),
            CropHealth::Good => write!(f, "good"),
            CropHealth::Stressed => write!(f, "stressed"),
            CropHealth::Critical => write!(f, "critical"),
        }
    }
}

/// Result of the soil threshold ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropAssessment {
    pub health: CropHealth,
    pub alerts: Vec<String>,
}

impl CropAssessment {
    fn new(health: CropHealth, alert: &str) -> Self {
        Self {
            health,
            alerts: vec![alert.to_string()],
        }
    }
}

/// Classify crop health from volumetric soil moisture (m³/m³) and soil
/// temperature (°C). First matching rule wins.
pub fn classify_crop_health(moisture: f64, temperature_celsius: f64) -> CropAssessment {
    if moisture < 0.15 {
        return CropAssessment::new(
            CropHealth::Critical,
            "🚨 Critical Drought Stress - Immediate irrigation needed",
        );
    }
    if moisture < 0.20 {
        return CropAssessment::new(
            CropHealth::Stressed,
            "⚠️ Drought Stress Alert - Cotton/Soybeans at risk",
        );
    }
    if moisture < 0.25 {
        return CropAssessment::new(
            CropHealth::Stressed,
            "Low soil moisture - Monitor water levels",
        );
    }
    if temperature_celsius > 35.0 {
        return CropAssessment::new(
            CropHealth::Stressed,
            "High soil temperature - Heat stress possible",
        );
    }
    if temperature_celsius < 10.0 {
        return CropAssessment::new(
            CropHealth::Stressed,
            "Low soil temperature - Growth may slow",
        );
    }
    if moisture > 0.35 && (18.0..=30.0).contains(&temperature_celsius) {
        return CropAssessment::new(CropHealth::Excellent, "Optimal growing conditions");
    }
    CropAssessment::new(CropHealth::Good, "Normal conditions")
}

/// Soil reading for one district at the current hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilReading {
    /// m³/m³, 0-7cm layer
    pub moisture: f64,
    pub temperature_celsius: f64,
    pub evapotranspiration_mm: f64,
}

impl Default for SoilReading {
    /// Values substituted when the series lacks the current hour
    fn default() -> Self {
        Self {
            moisture: 0.25,
            temperature_celsius: 25.0,
            evapotranspiration_mm: 2.0,
        }
    }
}

/// Crop health record for one agricultural district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropHealthRecord {
    pub district: String,
    pub soil_moisture: f64,
    pub soil_temperature: f64,
    pub evapotranspiration: f64,
    pub crop_health: CropHealth,
    pub alerts: Vec<String>,
    pub crops: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl CropHealthRecord {
    pub fn assess(
        district: &str,
        crops: &[&str],
        reading: SoilReading,
        now: DateTime<Utc>,
    ) -> Self {
        let assessment = classify_crop_health(reading.moisture, reading.temperature_celsius);
        Self {
            district: district.to_string(),
            soil_moisture: crate::validation::round_to(reading.moisture, 3),
            soil_temperature: crate::validation::round_to(reading.temperature_celsius, 1),
            evapotranspiration: crate::validation::round_to(reading.evapotranspiration_mm, 2),
            crop_health: assessment.health,
            alerts: assessment.alerts,
            crops: crops.iter().map(|c| c.to_string()).collect(),
            last_updated: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drought_overrides_temperature() {
        let dry = classify_crop_health(0.10, 22.0);
        assert_eq!(dry.health, CropHealth::Critical);
        assert_eq!(dry.alerts, vec!["🚨 Critical Drought Stress - Immediate irrigation needed"]);
        assert_eq!(classify_crop_health(0.10, 45.0).health, CropHealth::Critical);
        assert_eq!(classify_crop_health(0.10, -5.0).health, CropHealth::Critical);
    }

    #[test]
    fn moisture_ladder() {
        assert_eq!(classify_crop_health(0.15, 22.0).health, CropHealth::Stressed);
        assert_eq!(
            classify_crop_health(0.17, 22.0).alerts,
            vec!["⚠️ Drought Stress Alert - Cotton/Soybeans at risk"]
        );
        assert_eq!(
            classify_crop_health(0.22, 22.0).alerts,
            vec!["Low soil moisture - Monitor water levels"]
        );
    }

    #[test]
    fn temperature_stress() {
        let hot = classify_crop_health(0.30, 36.0);
        assert_eq!(hot.health, CropHealth::Stressed);
        assert_eq!(hot.alerts, vec!["High soil temperature - Heat stress possible"]);

        let cold = classify_crop_health(0.30, 9.0);
        assert_eq!(cold.health, CropHealth::Stressed);
        assert_eq!(cold.alerts, vec!["Low soil temperature - Growth may slow"]);
    }

    #[test]
    fn optimal_band() {
        assert_eq!(classify_crop_health(0.36, 18.0).health, CropHealth::Excellent);
        assert_eq!(classify_crop_health(0.36, 30.0).health, CropHealth::Excellent);
        assert_eq!(classify_crop_health(0.35, 22.0).health, CropHealth::Good);
        assert_eq!(classify_crop_health(0.40, 31.0).health, CropHealth::Good);
    }

    #[test]
    fn record_rounds_readings() {
        let reading = SoilReading {
            moisture: 0.123456,
            temperature_celsius: 24.96,
            evapotranspiration_mm: 2.345,
        };
        let record = CropHealthRecord::assess("Nashik", &["Grapes"], reading, Utc::now());
        assert_eq!(record.soil_moisture, 0.123);
        assert_eq!(record.soil_temperature, 25.0);
        assert_eq!(record.crop_health, CropHealth::Critical);
        assert_eq!(record.crops, vec!["Grapes".to_string()]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["cropHealth"], "critical");
        assert!(json["soilMoisture"].is_number());
    }
}
