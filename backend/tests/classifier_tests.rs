//! Tests for the risk classifiers
//! Verifies crop ladder priority, disease risk clamping and alert severities

use proptest::prelude::*;
use shared::{
    classify_crop_health, classify_disease_risk, flood_severity, seismic_severity, storm_severity,
    CropHealth, HealthCondition, RiskLevel,
};

// =============================================================================
// Crop health ladder
// First matching rule wins; drought overrides every temperature rule
// =============================================================================

mod crop_health {
    use super::*;

    #[test]
    fn drought_is_critical_even_when_hot() {
        let result = classify_crop_health(0.12, 40.0);
        assert_eq!(result.health, CropHealth::Critical);
        assert_eq!(result.alerts.len(), 1);
        assert!(result.alerts[0].starts_with("🚨 Critical Drought Stress"));
    }

    #[test]
    fn moisture_bands_are_stressed() {
        assert_eq!(classify_crop_health(0.17, 22.0).health, CropHealth::Stressed);
        assert!(classify_crop_health(0.17, 22.0).alerts[0].starts_with("⚠️ Drought Stress Alert"));
        assert_eq!(classify_crop_health(0.23, 22.0).health, CropHealth::Stressed);
        assert!(classify_crop_health(0.23, 22.0).alerts[0].contains("Monitor water levels"));
    }

    #[test]
    fn temperature_stress_after_moisture_is_adequate() {
        let hot = classify_crop_health(0.30, 36.0);
        assert_eq!(hot.health, CropHealth::Stressed);
        assert!(hot.alerts[0].contains("Heat stress possible"));

        let cold = classify_crop_health(0.30, 9.0);
        assert_eq!(cold.health, CropHealth::Stressed);
        assert!(cold.alerts[0].contains("Growth may slow"));
    }

    #[test]
    fn optimal_band_requires_moisture_above_035() {
        assert_eq!(classify_crop_health(0.36, 22.0).health, CropHealth::Excellent);
        assert_eq!(classify_crop_health(0.36, 18.0).health, CropHealth::Excellent);
        assert_eq!(classify_crop_health(0.36, 30.0).health, CropHealth::Excellent);
        // 0.30 is adequate but not in the optimal band
        assert_eq!(classify_crop_health(0.30, 22.0).health, CropHealth::Good);
        assert_eq!(classify_crop_health(0.35, 22.0).health, CropHealth::Good);
        assert_eq!(classify_crop_health(0.40, 31.0).health, CropHealth::Good);
    }

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(classify_crop_health(0.15, 22.0).health, CropHealth::Stressed);
        assert_eq!(classify_crop_health(0.25, 35.0).health, CropHealth::Good);
        assert_eq!(classify_crop_health(0.25, 10.0).health, CropHealth::Good);
    }
}

// =============================================================================
// Disease risk
// =============================================================================

mod disease_risk {
    use super::*;

    #[test]
    fn humid_coastal_day() {
        let risk = classify_disease_risk(28.0, 80.0, true);
        assert_eq!(risk.malaria, 60);
        assert_eq!(risk.dengue, 40);
        assert_eq!(risk.heat_stroke, 0);
        assert_eq!(risk.outbreak_risk(), 37);
        assert_eq!(HealthCondition::from_outbreak_risk(37), HealthCondition::Elevated);
    }

    #[test]
    fn inland_loses_coastal_bonus() {
        let risk = classify_disease_risk(28.0, 80.0, false);
        assert_eq!(risk.malaria, 45);
    }

    #[test]
    fn moderate_humidity_branches() {
        // Outside the malaria temperature window but humid enough for the second branch
        let risk = classify_disease_risk(38.0, 72.0, false);
        assert_eq!(risk.malaria, 18);
        assert_eq!(risk.dengue, 20);
    }

    #[test]
    fn heat_stroke_ladder() {
        assert_eq!(classify_disease_risk(43.0, 30.0, false).heat_stroke, 90);
        assert_eq!(classify_disease_risk(39.0, 30.0, false).heat_stroke, 60);
        assert_eq!(classify_disease_risk(36.0, 30.0, false).heat_stroke, 35);
        assert_eq!(classify_disease_risk(33.0, 30.0, false).heat_stroke, 20);
        assert_eq!(classify_disease_risk(30.0, 30.0, false).heat_stroke, 0);
        // Humidity above 70 raises the felt temperature: 34 + (90-70)*0.2 = 38
        assert_eq!(classify_disease_risk(34.0, 90.0, false).heat_stroke, 35);
        assert_eq!(classify_disease_risk(35.0, 90.0, false).heat_stroke, 60);
    }

    #[test]
    fn extreme_humidity_is_clamped() {
        let risk = classify_disease_risk(28.0, 1000.0, true);
        assert_eq!(risk.malaria, 100);
        assert_eq!(risk.dengue, 100);
        assert!(risk.outbreak_risk() <= 100);
    }

    #[test]
    fn condition_thresholds() {
        assert_eq!(HealthCondition::from_outbreak_risk(71), HealthCondition::Critical);
        assert_eq!(HealthCondition::from_outbreak_risk(70), HealthCondition::Warning);
        assert_eq!(HealthCondition::from_outbreak_risk(51), HealthCondition::Warning);
        assert_eq!(HealthCondition::from_outbreak_risk(50), HealthCondition::Elevated);
        assert_eq!(HealthCondition::from_outbreak_risk(36), HealthCondition::Elevated);
        assert_eq!(HealthCondition::from_outbreak_risk(35), HealthCondition::Normal);
    }
}

// =============================================================================
// Alert severities
// =============================================================================

mod alert_severity {
    use super::*;

    #[test]
    fn seismic() {
        assert_eq!(seismic_severity(6.1), RiskLevel::Critical);
        assert_eq!(seismic_severity(4.5), RiskLevel::High);
        assert_eq!(seismic_severity(3.0), RiskLevel::Medium);
    }

    #[test]
    fn flood_needs_more_than_50mm() {
        assert_eq!(flood_severity(50.0), None);
        assert_eq!(flood_severity(50.1), Some(RiskLevel::High));
        assert_eq!(flood_severity(100.0), Some(RiskLevel::High));
        assert_eq!(flood_severity(100.5), Some(RiskLevel::Critical));
    }

    #[test]
    fn thunderstorm_codes() {
        assert_eq!(storm_severity(82), None);
        assert_eq!(storm_severity(95), Some(RiskLevel::Medium));
        assert_eq!(storm_severity(96), Some(RiskLevel::Medium));
        assert_eq!(storm_severity(99), Some(RiskLevel::High));
    }
}

// =============================================================================
// Property tests: totality, purity and clamping
// =============================================================================

mod properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any moisture below 0.15 is critical regardless of temperature
        #[test]
        fn prop_drought_always_critical(moisture in 0.0f64..0.15, temp in -20.0f64..60.0) {
            prop_assert_eq!(classify_crop_health(moisture, temp).health, CropHealth::Critical);
        }

        /// Every reading yields exactly one alert message
        #[test]
        fn prop_crop_ladder_is_total(moisture in -1.0f64..2.0, temp in -40.0f64..80.0) {
            let result = classify_crop_health(moisture, temp);
            prop_assert_eq!(result.alerts.len(), 1);
            prop_assert_eq!(result.clone(), classify_crop_health(moisture, temp));
        }

        /// Percentages stay in [0, 100] for any finite input
        #[test]
        fn prop_disease_risk_clamped(
            temp in -50.0f64..70.0,
            humidity in -100.0f64..1000.0,
            coastal in any::<bool>(),
        ) {
            let risk = classify_disease_risk(temp, humidity, coastal);
            prop_assert!(risk.malaria <= 100);
            prop_assert!(risk.dengue <= 100);
            prop_assert!(risk.heat_stroke <= 100);
            prop_assert!(risk.outbreak_risk() <= 100);
        }

        /// The composite is the weighted sum of its parts
        #[test]
        fn prop_outbreak_is_weighted_sum(temp in 10.0f64..45.0, humidity in 0.0f64..100.0, coastal in any::<bool>()) {
            let risk = classify_disease_risk(temp, humidity, coastal);
            let expected = (risk.malaria as f64 * 0.35 + risk.dengue as f64 * 0.40 + risk.heat_stroke as f64 * 0.25).round();
            prop_assert_eq!(risk.outbreak_risk() as f64, expected);
        }

        /// Severity grows with magnitude
        #[test]
        fn prop_seismic_monotonic(a in 0.0f64..9.0, b in 0.0f64..9.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(seismic_severity(low) <= seismic_severity(high));
        }
    }
}
