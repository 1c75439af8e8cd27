//! Tests for the rainfall advisory generator
//! Verifies tier selection, default substitution and template output

use proptest::prelude::*;
use shared::{
    advisory_tier, generate_advisory, rainfall_ratio, AdvisoryRequest, AdvisoryResult, RiskLevel,
};

fn request(rainfall: f64, district: &str, average: f64, temperature: f64) -> AdvisoryRequest {
    AdvisoryRequest {
        current_rainfall: Some(rainfall),
        district: Some(district.to_string()),
        historical_average: Some(average),
        temperature: Some(temperature),
    }
}

fn advise(request: AdvisoryRequest) -> AdvisoryResult {
    generate_advisory(&request.normalize())
}

// =============================================================================
// Tier selection
// =============================================================================

mod tiers {
    use super::*;

    #[test]
    fn absolute_rainfall_alone_reaches_critical() {
        // Ratio is ~1.88, below 2.0, but 160mm is over the 150mm bar
        let result = advise(request(160.0, "Pune", 85.0, 30.0));
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert!(result.analysis.starts_with("CRITICAL ALERT: Pune"));
        assert!(result.analysis.contains("160mm"));
        assert!(result.analysis.contains("188%"));
    }

    #[test]
    fn ratio_alone_reaches_critical() {
        assert_eq!(advise(request(45.0, "Satara", 20.0, 24.0)).risk_level, RiskLevel::Critical);
    }

    #[test]
    fn high_tier() {
        let result = advise(request(110.0, "Kolhapur", 100.0, 27.0));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.analysis.contains("exceeding normal patterns by 10%"));
    }

    #[test]
    fn rainfall_of_exactly_50_with_even_ratio_is_low() {
        assert_eq!(advise(request(50.0, "Nashik", 50.0, 25.0)).risk_level, RiskLevel::Low);
    }

    #[test]
    fn just_over_either_threshold_is_medium() {
        assert_eq!(advise(request(50.5, "Nashik", 60.0, 25.0)).risk_level, RiskLevel::Medium);
        let above = advise(request(40.0, "Nashik", 39.0, 25.0));
        assert_eq!(above.risk_level, RiskLevel::Medium);
        assert!(above.analysis.contains("slightly above"));
    }

    #[test]
    fn high_tier_percentage_rounds_half_up() {
        let result = advise(request(130.0, "Nashik", 80.0, 27.0));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.analysis.contains("exceeding normal patterns by 63%"));
    }

    #[test]
    fn critical_tier_percentage_rounds_half_up() {
        // 165 / 40 = 4.125, shown as 413%
        let result = advise(request(165.0, "Raigad", 40.0, 27.0));
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert!(result.analysis.contains("which is 413% of historical average"));
    }

    #[test]
    fn medium_within_average_wording() {
        let result = advise(request(60.0, "Solapur", 85.0, 25.0));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.analysis.contains("within the historical average of 85mm"));
    }
}

// =============================================================================
// Defaults for missing or unusable fields
// =============================================================================

mod defaults {
    use super::*;

    #[test]
    fn empty_request() {
        let input = AdvisoryRequest::default().normalize();
        assert_eq!(input.current_rainfall_mm, 0.0);
        assert_eq!(input.historical_average_mm, 85.0);
        assert_eq!(input.temperature_celsius, 25.0);
        assert_eq!(input.district, "Unknown District");
    }

    #[test]
    fn zero_or_negative_average_uses_default() {
        let zero = request(90.0, "Thane", 0.0, 28.0).normalize();
        assert_eq!(zero.historical_average_mm, 85.0);
        let negative = request(90.0, "Thane", -10.0, 28.0).normalize();
        assert_eq!(negative.historical_average_mm, 85.0);
        assert_eq!(rainfall_ratio(90.0, 0.0), 90.0 / 85.0);
    }

    #[test]
    fn freezing_temperature_is_kept() {
        let input = request(10.0, "Nagpur", 85.0, 0.0).normalize();
        assert_eq!(input.temperature_celsius, 0.0);
    }

    #[test]
    fn blank_district_and_negative_rainfall() {
        let input = request(-5.0, "   ", 85.0, 28.0).normalize();
        assert_eq!(input.district, "Unknown District");
        assert_eq!(input.current_rainfall_mm, 0.0);
    }

    #[test]
    fn partial_json_body() {
        let request: AdvisoryRequest = serde_json::from_str(r#"{"currentRainfall": 130}"#).unwrap();
        let result = advise(request);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.analysis.contains("Unknown District"));
    }
}

// =============================================================================
// Template output
// =============================================================================

mod templates {
    use super::*;

    #[test]
    fn every_tier_has_three_recommendations_and_both_languages() {
        for rainfall in [0.0, 60.0, 120.0, 200.0] {
            let result = advise(request(rainfall, "Mumbai", 85.0, 29.0));
            assert_eq!(result.recommendations.len(), 3);
            assert!(!result.cure_plan.english.is_empty());
            assert!(!result.cure_plan.marathi.is_empty());
        }
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(advise(request(200.0, "Mumbai", 85.0, 29.0))).unwrap();
        assert_eq!(value["riskLevel"], "critical");
        assert!(value["curePlan"]["marathi"].is_string());
        assert_eq!(
            value["recommendations"][0],
            "Initiate immediate evacuation of flood-prone zones"
        );
    }

    #[test]
    fn fallback_is_medium() {
        let fallback = AdvisoryResult::fallback();
        assert_eq!(fallback.risk_level, RiskLevel::Medium);
        assert_eq!(fallback.recommendations.len(), 3);
    }
}

// =============================================================================
// Property tests
// =============================================================================

mod properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Same input, same advisory
        #[test]
        fn prop_generation_is_pure(
            rainfall in 0.0f64..400.0,
            average in 1.0f64..300.0,
            temperature in -5.0f64..48.0,
        ) {
            let a = advise(request(rainfall, "Sangli", average, temperature));
            let b = advise(request(rainfall, "Sangli", average, temperature));
            prop_assert_eq!(a, b);
        }

        /// More rain against the same average never lowers the tier
        #[test]
        fn prop_tier_monotonic_in_rainfall(a in 0.0f64..400.0, b in 0.0f64..400.0, average in 1.0f64..300.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_tier = advisory_tier(low, rainfall_ratio(low, average));
            let high_tier = advisory_tier(high, rainfall_ratio(high, average));
            prop_assert!(low_tier <= high_tier);
        }

        /// Arbitrary optional fields never panic and always produce three recommendations
        #[test]
        fn prop_any_request_is_answered(
            rainfall in proptest::option::of(any::<f64>()),
            average in proptest::option::of(any::<f64>()),
            temperature in proptest::option::of(any::<f64>()),
        ) {
            let result = advise(AdvisoryRequest {
                current_rainfall: rainfall,
                district: None,
                historical_average: average,
                temperature,
            });
            prop_assert_eq!(result.recommendations.len(), 3);
        }
    }
}
