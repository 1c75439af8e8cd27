//! Validation and normalisation utilities for the AETHER risk core
//!
//! Every percentage the classifiers emit passes through [`clamp_percent`],
//! and upstream readings are range-checked before they reach a classifier.

use thiserror::Error;

use crate::types::GpsCoordinates;

/// Rough bounding box of Maharashtra
pub const MAHARASHTRA_MIN_LATITUDE: f64 = 15.6;
pub const MAHARASHTRA_MAX_LATITUDE: f64 = 22.1;
pub const MAHARASHTRA_MIN_LONGITUDE: f64 = 72.6;
pub const MAHARASHTRA_MAX_LONGITUDE: f64 = 80.9;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

// ============================================================================
// Numeric helpers
// ============================================================================

/// Clamp a percentage to [0, 100]. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Round to a fixed number of decimal places for display payloads
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

// ============================================================================
// Reading validations
// ============================================================================

/// Validate that coordinates fall inside the state bounding box
pub fn validate_coordinates(coords: GpsCoordinates) -> Result<(), ValidationError> {
    check_range(
        "latitude",
        coords.latitude,
        MAHARASHTRA_MIN_LATITUDE,
        MAHARASHTRA_MAX_LATITUDE,
    )?;
    check_range(
        "longitude",
        coords.longitude,
        MAHARASHTRA_MIN_LONGITUDE,
        MAHARASHTRA_MAX_LONGITUDE,
    )?;
    Ok(())
}

/// Volumetric soil moisture must be a fraction in m³/m³
pub fn validate_soil_moisture(moisture: f64) -> Result<f64, ValidationError> {
    check_range("soil_moisture", moisture, 0.0, 1.0)
}

/// Relative humidity in percent
pub fn validate_humidity(humidity: f64) -> Result<f64, ValidationError> {
    check_range("humidity", humidity, 0.0, 100.0)
}

/// Air or soil temperature in °C, within physically plausible bounds
pub fn validate_temperature(temperature: f64) -> Result<f64, ValidationError> {
    check_range("temperature", temperature, -60.0, 70.0)
}

/// Precipitation in mm must be non-negative
pub fn validate_precipitation(precipitation: f64) -> Result<f64, ValidationError> {
    check_range("precipitation", precipitation, 0.0, f64::MAX)
}
