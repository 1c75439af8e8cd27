//! Geo registry of monitored Maharashtra districts
//!
//! The registry is static: districts are never created or destroyed at
//! runtime. Each signal service works over a subset of it.

use serde::Serialize;

use crate::types::GpsCoordinates;

/// A monitored district
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u32,
    pub coastal: bool,
    /// Major crops, most important first. Empty for non-agricultural districts.
    pub crops: &'static [&'static str],
}

impl District {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }

    pub fn is_agricultural(&self) -> bool {
        !self.crops.is_empty()
    }
}

pub const DISTRICTS: [District; 12] = [
    District {
        name: "Mumbai",
        latitude: 19.076,
        longitude: 72.8777,
        population: 12_442_373,
        coastal: true,
        crops: &[],
    },
    District {
        name: "Pune",
        latitude: 18.5204,
        longitude: 73.8567,
        population: 3_124_458,
        coastal: false,
        crops: &["Sugarcane", "Rice", "Vegetables"],
    },
    District {
        name: "Nagpur",
        latitude: 21.1458,
        longitude: 79.0882,
        population: 2_405_421,
        coastal: false,
        crops: &["Oranges", "Cotton", "Soybeans"],
    },
    District {
        name: "Thane",
        latitude: 19.2183,
        longitude: 72.9781,
        population: 1_841_488,
        coastal: true,
        crops: &[],
    },
    District {
        name: "Nashik",
        latitude: 19.9975,
        longitude: 73.7898,
        population: 1_486_053,
        coastal: false,
        crops: &["Grapes", "Onion", "Wheat"],
    },
    District {
        name: "Aurangabad",
        latitude: 19.8762,
        longitude: 75.3433,
        population: 1_175_116,
        coastal: false,
        crops: &["Cotton", "Jowar", "Bajra"],
    },
    District {
        name: "Solapur",
        latitude: 17.6599,
        longitude: 75.9064,
        population: 951_118,
        coastal: false,
        crops: &["Pomegranate", "Sugarcane", "Jowar"],
    },
    District {
        name: "Kolhapur",
        latitude: 16.7058,
        longitude: 74.2433,
        population: 549_283,
        coastal: false,
        crops: &["Sugarcane", "Rice", "Groundnut"],
    },
    District {
        name: "Sangli",
        latitude: 16.8524,
        longitude: 74.5815,
        population: 436_781,
        coastal: false,
        crops: &["Grapes", "Turmeric", "Sugarcane"],
    },
    District {
        name: "Satara",
        latitude: 17.6805,
        longitude: 74.0183,
        population: 120_000,
        coastal: false,
        crops: &["Strawberry", "Rice", "Jowar"],
    },
    District {
        name: "Ratnagiri",
        latitude: 16.9902,
        longitude: 73.3,
        population: 76_239,
        coastal: true,
        crops: &[],
    },
    District {
        name: "Sindhudurg",
        latitude: 15.8667,
        longitude: 73.6358,
        population: 48_500,
        coastal: true,
        crops: &[],
    },
];

/// Districts polled for precipitation and thunderstorm alerts
const ALERT_DISTRICT_NAMES: [&str; 4] = ["Mumbai", "Pune", "Kolhapur", "Ratnagiri"];

/// Agricultural districts, in the order the soil series is requested
const AGRI_DISTRICT_NAMES: [&str; 8] = [
    "Nashik",
    "Pune",
    "Nagpur",
    "Aurangabad",
    "Solapur",
    "Kolhapur",
    "Sangli",
    "Satara",
];

/// All monitored districts in registry order
pub fn all_districts() -> &'static [District] {
    &DISTRICTS
}

/// Look up a district by name (case-insensitive)
pub fn find_district(name: &str) -> Option<&'static District> {
    DISTRICTS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
}

pub fn alert_districts() -> Vec<&'static District> {
    ALERT_DISTRICT_NAMES
        .iter()
        .filter_map(|name| find_district(name))
        .collect()
}

pub fn agricultural_districts() -> Vec<&'static District> {
    AGRI_DISTRICT_NAMES
        .iter()
        .filter_map(|name| find_district(name))
        .collect()
}
