//! Rainfall advisory generator
//!
//! A deterministic template lookup: the rainfall ratio and absolute rainfall
//! select one of four tiers, and each tier maps to a fixed analysis template,
//! three recommendations and a bilingual action plan. There is no model
//! behind the "AI reasoning" panel that displays it.

use serde::{Deserialize, Serialize};

use crate::types::RiskLevel;

pub const DEFAULT_RAINFALL_MM: f64 = 0.0;
pub const DEFAULT_HISTORICAL_AVERAGE_MM: f64 = 85.0;
pub const DEFAULT_TEMPERATURE_CELSIUS: f64 = 25.0;
pub const DEFAULT_DISTRICT: &str = "Unknown District";

/// Raw advisory request as posted by the dashboard. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    #[serde(default)]
    pub current_rainfall: Option<f64>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub historical_average: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// Advisory input with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryInput {
    pub current_rainfall_mm: f64,
    pub district: String,
    /// Always > 0
    pub historical_average_mm: f64,
    pub temperature_celsius: f64,
}

impl AdvisoryRequest {
    /// Substitute defaults for missing or unusable fields. Never fails.
    pub fn normalize(self) -> AdvisoryInput {
        let current_rainfall_mm = self
            .current_rainfall
            .filter(|v| v.is_finite())
            .map(|v| v.max(0.0))
            .unwrap_or(DEFAULT_RAINFALL_MM);

        // A non-positive average would make the ratio meaningless
        let historical_average_mm = self
            .historical_average
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_HISTORICAL_AVERAGE_MM);

        let temperature_celsius = self
            .temperature
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_TEMPERATURE_CELSIUS);

        let district = self
            .district
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DISTRICT.to_string());

        AdvisoryInput {
            current_rainfall_mm,
            district,
            historical_average_mm,
            temperature_celsius,
        }
    }
}

/// Bilingual action plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurePlan {
    pub english: String,
    pub marathi: String,
}

/// Generated advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResult {
    pub analysis: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub cure_plan: CurePlan,
}

struct TierTemplate {
    recommendations: [&'static str; 3],
    plan_english: &'static str,
    plan_marathi: &'static str,
}

const CRITICAL_TEMPLATE: TierTemplate = TierTemplate {
    recommendations: [
        "Initiate immediate evacuation of flood-prone zones",
        "Deploy NDRF teams to high-risk areas",
        "Activate all emergency shelters and relief camps",
    ],
    plan_english: "Evacuate all residents from flood zones immediately. Deploy rescue boats and helicopters. Set up medical camps at relief centers. Coordinate with Army and NDRF for large-scale rescue operations.",
    plan_marathi: "पूरग्रस्त भागातील सर्व रहिवाशांना तात्काळ स्थलांतरित करा. बचाव बोटी आणि हेलिकॉप्टर तैनात करा. मदत केंद्रांवर वैद्यकीय शिबिरे उभारा. मोठ्या प्रमाणावर बचाव कार्यासाठी सेना आणि NDRF शी समन्वय साधा.",
};

const HIGH_TEMPLATE: TierTemplate = TierTemplate {
    recommendations: [
        "Alert all emergency response teams for deployment",
        "Clear and inspect drainage systems in urban areas",
        "Issue public advisory through all channels",
    ],
    plan_english: "Pre-position relief supplies at district headquarters. Alert hospitals for potential casualties. Establish communication links with all gram panchayats. Prepare evacuation transport.",
    plan_marathi: "जिल्हा मुख्यालयात मदत साहित्य तयार ठेवा. संभाव्य जखमींसाठी रुग्णालयांना सतर्क करा. सर्व ग्रामपंचायतींशी संपर्क प्रस्थापित करा. स्थलांतर वाहतूक तयार करा.",
};

const MEDIUM_TEMPLATE: TierTemplate = TierTemplate {
    recommendations: [
        "Ensure drainage systems are clear and functional",
        "Keep emergency response teams on standby",
        "Monitor river water levels every 6 hours",
    ],
    plan_english: "Deploy mobile weather stations to monitor conditions. Coordinate with local authorities for evacuation route planning. Ensure relief supplies are stocked and accessible.",
    plan_marathi: "परिस्थितीवर लक्ष ठेवण्यासाठी मोबाईल हवामान केंद्रे तैनात करा. स्थलांतर मार्ग नियोजनासाठी स्थानिक अधिकाऱ्यांशी समन्वय साधा. मदत साहित्य तयार आणि उपलब्ध असल्याची खात्री करा.",
};

const LOW_TEMPLATE: TierTemplate = TierTemplate {
    recommendations: [
        "Continue routine weather monitoring",
        "Verify emergency communication systems are operational",
        "Update district preparedness inventory",
    ],
    plan_english: "Maintain regular monitoring schedule. Verify all emergency equipment is functional. Conduct routine checks on dam water levels and spillway conditions.",
    plan_marathi: "नियमित देखरेख वेळापत्रक कायम ठेवा. सर्व आपत्कालीन उपकरणे कार्यरत असल्याची पडताळणी करा. धरणाच्या पाण्याची पातळी आणि सांडव्याच्या स्थितीची नियमित तपासणी करा.",
};

fn template(tier: RiskLevel) -> &'static TierTemplate {
    match tier {
        RiskLevel::Critical => &CRITICAL_TEMPLATE,
        RiskLevel::High => &HIGH_TEMPLATE,
        RiskLevel::Medium => &MEDIUM_TEMPLATE,
        RiskLevel::Low => &LOW_TEMPLATE,
    }
}

/// Current rainfall as a multiple of the historical average
pub fn rainfall_ratio(current_rainfall_mm: f64, historical_average_mm: f64) -> f64 {
    let average = if historical_average_mm.is_finite() && historical_average_mm > 0.0 {
        historical_average_mm
    } else {
        DEFAULT_HISTORICAL_AVERAGE_MM
    };
    current_rainfall_mm / average
}

/// Select the advisory tier. Ratio and absolute thresholds are OR-ed, so
/// 160mm against an 85mm average (ratio ≈1.88) is critical on rainfall alone.
pub fn advisory_tier(current_rainfall_mm: f64, ratio: f64) -> RiskLevel {
    if ratio > 2.0 || current_rainfall_mm > 150.0 {
        RiskLevel::Critical
    } else if ratio > 1.5 || current_rainfall_mm > 100.0 {
        RiskLevel::High
    } else if ratio > 1.0 || current_rainfall_mm > 50.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Whole percent, halves rounded away from zero
fn whole_percent(fraction: f64) -> f64 {
    (fraction * 100.0).round()
}

fn analysis_text(tier: RiskLevel, input: &AdvisoryInput, ratio: f64) -> String {
    let district = &input.district;
    let rainfall = input.current_rainfall_mm;
    let temperature = input.temperature_celsius;

    match tier {
        RiskLevel::Critical => format!(
            "CRITICAL ALERT: {} is experiencing extreme rainfall at {}mm, which is {}% of historical average. \
             Immediate action required. Flash flood risk is very high with current temperature at {}°C \
             driving intense runoff from the ghats.",
            district,
            rainfall,
            whole_percent(ratio),
            temperature
        ),
        RiskLevel::High => format!(
            "HIGH RISK: Rainfall in {} has reached {}mm, exceeding normal patterns by {}%. \
             Water logging expected in low-lying areas. Current temperature of {}°C indicates \
             humid conditions that may persist.",
            district,
            rainfall,
            whole_percent(ratio - 1.0),
            temperature
        ),
        RiskLevel::Medium => format!(
            "MODERATE RISK: {} is receiving steady rainfall at {}mm. This is {} the historical \
             average of {}mm. Standard monsoon protocols should remain active.",
            district,
            rainfall,
            if ratio > 1.0 { "slightly above" } else { "within" },
            input.historical_average_mm
        ),
        RiskLevel::Low => format!(
            "LOW RISK: Current rainfall in {} at {}mm is within normal parameters. Temperature at {}°C. \
             Conditions are stable but continued monitoring is advised during monsoon season.",
            district, rainfall, temperature
        ),
    }
}

/// Generate the advisory for a normalised input
pub fn generate_advisory(input: &AdvisoryInput) -> AdvisoryResult {
    let ratio = rainfall_ratio(input.current_rainfall_mm, input.historical_average_mm);
    let tier = advisory_tier(input.current_rainfall_mm, ratio);
    let template = template(tier);

    AdvisoryResult {
        analysis: analysis_text(tier, input, ratio),
        risk_level: tier,
        recommendations: template
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
        cure_plan: CurePlan {
            english: template.plan_english.to_string(),
            marathi: template.plan_marathi.to_string(),
        },
    }
}

impl AdvisoryResult {
    /// Fixed medium-tier advisory returned when a request cannot be read
    pub fn fallback() -> Self {
        Self {
            analysis: "The current rainfall levels are within expected parameters. Continued monitoring \
                       is recommended as monsoon patterns can shift rapidly in the Sahyadri region."
                .to_string(),
            risk_level: RiskLevel::Medium,
            recommendations: vec![
                "Ensure drainage systems are clear and functional".to_string(),
                "Alert emergency response teams for standby".to_string(),
                "Monitor river water levels in the next 6 hours".to_string(),
            ],
            cure_plan: CurePlan {
                english: "Deploy mobile weather stations to affected areas. Coordinate with local \
                          authorities for evacuation routes. Prepare relief supplies."
                    .to_string(),
                marathi: "प्रभावित भागात मोबाईल हवामान केंद्रे तैनात करा. स्थलांतर मार्गांसाठी स्थानिक अधिकाऱ्यांशी समन्वय साधा. मदत साहित्य तयार ठेवा."
                    .to_string(),
            },
        }
    }
}
