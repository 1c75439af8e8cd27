//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Ordinal risk bucket shared by disaster alerts and the advisory generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// High and critical alerts are surfaced on the dashboard's critical strip
    pub fn is_urgent(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a payload came from the upstream source or a substitute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// A payload tagged with the source that produced it
///
/// Fallback data is otherwise indistinguishable from genuine low-risk data,
/// so every signal service returns its result wrapped in this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: String,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(data: T, source: impl Into<String>) -> Self {
        Self {
            data,
            source: source.into(),
            origin: DataOrigin::Live,
        }
    }

    pub fn fallback(data: T, source: impl Into<String>) -> Self {
        Self {
            data,
            source: source.into(),
            origin: DataOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DataOrigin::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            source: self.source,
            origin: self.origin,
        }
    }
}

/// Connectivity of the polling loop as seen by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Reconnecting,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(RiskLevel::Critical.is_urgent());
        assert!(!RiskLevel::Medium.is_urgent());
    }

    #[test]
    fn sourced_map_keeps_provenance() {
        let sourced = Sourced::fallback(vec![1, 2, 3], "AETHER Fallback Model");
        let mapped = sourced.map(|v| v.len());
        assert_eq!(mapped.data, 3);
        assert!(mapped.is_fallback());
        assert_eq!(mapped.source, "AETHER Fallback Model");
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
