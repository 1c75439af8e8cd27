//! Weather data models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time weather reading for one district
///
/// Produced fresh on every poll cycle and superseded by the next cycle's
/// reading for the same district.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub district: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "rainfall")]
    pub rainfall_mm: f64,
    #[serde(rename = "temperature")]
    pub temperature_celsius: f64,
    #[serde(rename = "humidity")]
    pub humidity_percent: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed_kmh: f64,
    pub condition: String,
    pub weather_code: u8,
    pub timestamp: DateTime<Utc>,
}

/// Sky condition derived from rainfall and humidity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    HeavyRain,
    Rain,
    LightRain,
    Overcast,
    PartlyCloudy,
    Clear,
}

impl SkyCondition {
    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::HeavyRain => "Heavy Rain",
            SkyCondition::Rain => "Rain",
            SkyCondition::LightRain => "Light Rain",
            SkyCondition::Overcast => "Overcast",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Clear => "Clear",
        }
    }

    /// WMO weather interpretation code
    pub fn wmo_code(&self) -> u8 {
        match self {
            SkyCondition::HeavyRain => 65,
            SkyCondition::Rain => 63,
            SkyCondition::LightRain => 61,
            SkyCondition::Overcast => 3,
            SkyCondition::PartlyCloudy => 2,
            SkyCondition::Clear => 0,
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Select a sky condition from the rainfall/humidity ladder (first match wins)
pub fn classify_sky(rainfall_mm: f64, humidity_percent: f64) -> SkyCondition {
    if rainfall_mm > 10.0 {
        SkyCondition::HeavyRain
    } else if rainfall_mm > 5.0 {
        SkyCondition::Rain
    } else if rainfall_mm > 0.0 {
        SkyCondition::LightRain
    } else if humidity_percent > 80.0 {
        SkyCondition::Overcast
    } else if humidity_percent > 65.0 {
        SkyCondition::PartlyCloudy
    } else {
        SkyCondition::Clear
    }
}

/// One day of a city forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
    pub condition: String,
    pub rainfall: f64,
    pub humidity: f64,
    pub icon: String,
}

/// Current conditions reported alongside a forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub condition: String,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temp: 28.0,
            feels_like: 30.0,
            humidity: 65.0,
            condition: "Clear".to_string(),
        }
    }
}

/// Multi-day forecast for one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityForecast {
    pub district: String,
    pub forecast: Vec<ForecastDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
}

/// Map a wttr.in weather code to a display icon
pub fn weather_icon(code: &str) -> &'static str {
    match code {
        "113" => "☀️",
        "116" => "⛅",
        "119" | "122" => "☁️",
        "143" | "248" | "260" => "🌫️",
        "179" | "227" | "320" | "323" | "326" | "368" | "371" => "🌨️",
        "230" | "329" | "332" | "335" | "338" | "395" => "❄️",
        "200" | "386" | "389" | "392" => "⛈️",
        "176" | "182" | "263" | "266" | "293" | "296" | "299" | "302" | "305" | "308" | "311"
        | "314" | "317" | "350" | "353" | "356" | "359" | "362" | "365" | "374" | "377" => "🌧️",
        _ => "☀️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_ladder_prefers_rain_over_humidity() {
        assert_eq!(classify_sky(12.0, 40.0), SkyCondition::HeavyRain);
        assert_eq!(classify_sky(6.0, 95.0), SkyCondition::Rain);
        assert_eq!(classify_sky(0.1, 95.0), SkyCondition::LightRain);
        assert_eq!(classify_sky(0.0, 85.0), SkyCondition::Overcast);
        assert_eq!(classify_sky(0.0, 70.0), SkyCondition::PartlyCloudy);
        assert_eq!(classify_sky(0.0, 65.0), SkyCondition::Clear);
    }

    #[test]
    fn sky_boundaries_are_strict() {
        assert_eq!(classify_sky(10.0, 50.0), SkyCondition::Rain);
        assert_eq!(classify_sky(5.0, 50.0), SkyCondition::LightRain);
        assert_eq!(classify_sky(0.0, 80.0), SkyCondition::PartlyCloudy);
    }

    #[test]
    fn wmo_codes() {
        assert_eq!(SkyCondition::HeavyRain.wmo_code(), 65);
        assert_eq!(SkyCondition::Clear.wmo_code(), 0);
        assert_eq!(SkyCondition::PartlyCloudy.to_string(), "Partly Cloudy");
    }

    #[test]
    fn icons_default_to_sun() {
        assert_eq!(weather_icon("389"), "⛈️");
        assert_eq!(weather_icon("296"), "🌧️");
        assert_eq!(weather_icon("999"), "☀️");
    }

    #[test]
    fn reading_uses_dashboard_field_names() {
        let reading = WeatherReading {
            district: "Pune".to_string(),
            latitude: 18.52,
            longitude: 73.85,
            rainfall_mm: 4.2,
            temperature_celsius: 27.5,
            humidity_percent: 71.0,
            wind_speed_kmh: 12.3,
            condition: "Light Rain".to_string(),
            weather_code: 61,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["rainfall"], 4.2);
        assert_eq!(json["windSpeed"], 12.3);
        assert_eq!(json["weatherCode"], 61);
        assert_eq!(json["lat"], 18.52);
    }
}
