//! WebAssembly module for the AETHER Maharashtra monitor
//!
//! Provides client-side computation for:
//! - Crop health classification from soil readings
//! - Disease outbreak risk
//! - Rainfall advisory tiers and full advisories

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Classify crop health; returns "excellent", "good", "stressed" or "critical"
#[wasm_bindgen]
pub fn classify_crop_health(moisture: f64, temperature_celsius: f64) -> String {
    shared::classify_crop_health(moisture, temperature_celsius)
        .health
        .to_string()
}

/// Alert messages for a soil reading, as a JS array of strings
#[wasm_bindgen]
pub fn crop_health_alerts(moisture: f64, temperature_celsius: f64) -> js_sys::Array {
    shared::classify_crop_health(moisture, temperature_celsius)
        .alerts
        .iter()
        .map(|alert| JsValue::from_str(alert))
        .collect()
}

fn disease_risk_json(temperature_celsius: f64, humidity_percent: f64, is_coastal: bool) -> String {
    let risk = shared::classify_disease_risk(temperature_celsius, humidity_percent, is_coastal);
    let condition = HealthCondition::from_outbreak_risk(risk.outbreak_risk());
    serde_json::json!({
        "malaria": risk.malaria,
        "dengue": risk.dengue,
        "heatStroke": risk.heat_stroke,
        "outbreakRisk": risk.outbreak_risk(),
        "condition": condition,
    })
    .to_string()
}

/// Disease risk percentages, composite outbreak risk and condition as JSON
#[wasm_bindgen]
pub fn classify_disease_risk(temperature_celsius: f64, humidity_percent: f64, is_coastal: bool) -> String {
    disease_risk_json(temperature_celsius, humidity_percent, is_coastal)
}

/// Advisory risk tier for a rainfall reading against its historical average
#[wasm_bindgen]
pub fn advisory_tier(current_rainfall: f64, historical_average: f64) -> String {
    let input = AdvisoryRequest {
        current_rainfall: Some(current_rainfall),
        historical_average: Some(historical_average),
        ..Default::default()
    }
    .normalize();
    let ratio = shared::rainfall_ratio(input.current_rainfall_mm, input.historical_average_mm);
    shared::advisory_tier(input.current_rainfall_mm, ratio).to_string()
}

/// Advisory for a JSON request; missing fields take defaults and an
/// unreadable request yields the fallback advisory
fn advisory_json(request_json: &str) -> Result<String, String> {
    let result = match serde_json::from_str::<AdvisoryRequest>(request_json) {
        Ok(request) => shared::generate_advisory(&request.normalize()),
        Err(err) => {
            warn(&format!("Unreadable advisory request, using fallback: {}", err));
            AdvisoryResult::fallback()
        }
    };
    serde_json::to_string(&result).map_err(|e| format!("Failed to encode advisory: {}", e))
}

#[wasm_bindgen]
pub fn generate_advisory(request_json: &str) -> Result<String, JsValue> {
    advisory_json(request_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_message: &str) {}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn crop_alerts_are_js_strings() {
        let alerts = crop_health_alerts(0.12, 30.0);
        assert_eq!(alerts.length(), 1);
        let first = alerts.get(0).as_string().unwrap();
        assert!(first.starts_with("🚨 Critical Drought Stress"));
    }

    #[wasm_bindgen_test]
    fn advisory_round_trips_through_js() {
        let json = generate_advisory(r#"{"currentRainfall": 200}"#).unwrap();
        assert!(json.contains("\"riskLevel\":\"critical\""));
    }
}
