//! Open-Meteo forecast API client
//!
//! Free, keyless. Used for current precipitation/weather codes, current air
//! temperature and humidity, and the hourly soil series.

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, SoilReading};

use super::{decode_json, FetchError, OneOrMany};

pub const OPEN_METEO_SOURCE: &str = "Open-Meteo";
const TIMEZONE: &str = "Asia/Kolkata";

/// Open-Meteo client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Current precipitation and WMO weather code at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentPrecipitation {
    pub precipitation_mm: f64,
    pub weather_code: u8,
}

/// Current air conditions at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentAir {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

#[derive(Debug, Deserialize)]
struct PrecipitationResponse {
    current: PrecipitationCurrent,
}

#[derive(Debug, Deserialize)]
struct PrecipitationCurrent {
    precipitation: Option<f64>,
    weather_code: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct AirResponse {
    current: AirCurrent,
}

#[derive(Debug, Deserialize)]
struct AirCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
}

/// Hourly soil series for one location; today's hours in local time
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SoilSeries {
    #[serde(default)]
    pub hourly: HourlySoil,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HourlySoil {
    #[serde(default)]
    pub soil_moisture_0_to_7cm: Vec<Option<f64>>,
    #[serde(default)]
    pub soil_temperature_0cm: Vec<Option<f64>>,
    #[serde(default)]
    pub evapotranspiration: Vec<Option<f64>>,
}

fn value_at(series: &[Option<f64>], hour: usize) -> Option<f64> {
    series.get(hour).copied().flatten().filter(|v| v.is_finite())
}

impl SoilSeries {
    /// Reading for a local hour; gaps in the series take the defaults
    pub fn reading_at(&self, hour: u32) -> SoilReading {
        let hour = hour as usize;
        let defaults = SoilReading::default();
        SoilReading {
            moisture: value_at(&self.hourly.soil_moisture_0_to_7cm, hour)
                .filter(|m| shared::validate_soil_moisture(*m).is_ok())
                .unwrap_or(defaults.moisture),
            temperature_celsius: value_at(&self.hourly.soil_temperature_0cm, hour)
                .unwrap_or(defaults.temperature_celsius),
            evapotranspiration_mm: value_at(&self.hourly.evapotranspiration, hour)
                .unwrap_or(defaults.evapotranspiration_mm),
        }
    }
}

fn join_coordinates(points: &[GpsCoordinates]) -> (String, String) {
    let latitudes = points
        .iter()
        .map(|p| p.latitude.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let longitudes = points
        .iter()
        .map(|p| p.longitude.to_string())
        .collect::<Vec<_>>()
        .join(",");
    (latitudes, longitudes)
}

impl OpenMeteoClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }

    /// Current precipitation and weather code for one point
    pub async fn current_precipitation(
        &self,
        point: GpsCoordinates,
    ) -> Result<CurrentPrecipitation, FetchError> {
        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("latitude", point.latitude.to_string()),
                ("longitude", point.longitude.to_string()),
                ("current", "precipitation,weather_code".to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await?;

        let data: PrecipitationResponse = decode_json(response).await?;
        Ok(CurrentPrecipitation {
            precipitation_mm: data
                .current
                .precipitation
                .and_then(|p| shared::validate_precipitation(p).ok())
                .unwrap_or(0.0),
            weather_code: data.current.weather_code.unwrap_or(0),
        })
    }

    /// Current temperature and humidity for several points in one request,
    /// returned in request order
    pub async fn current_air(&self, points: &[GpsCoordinates]) -> Result<Vec<CurrentAir>, FetchError> {
        let (latitudes, longitudes) = join_coordinates(points);
        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("latitude", latitudes),
                ("longitude", longitudes),
                ("current", "temperature_2m,relative_humidity_2m".to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await?;

        let data: OneOrMany<AirResponse> = decode_json(response).await?;
        let readings = data.into_vec();
        if readings.len() != points.len() {
            return Err(FetchError::Decode(format!(
                "expected {} locations, got {}",
                points.len(),
                readings.len()
            )));
        }

        readings
            .into_iter()
            .map(|r| match (r.current.temperature_2m, r.current.relative_humidity_2m) {
                (Some(temperature_celsius), Some(humidity_percent)) => Ok(CurrentAir {
                    temperature_celsius,
                    humidity_percent,
                }),
                _ => Err(FetchError::Decode("missing current air fields".to_string())),
            })
            .collect()
    }

    /// Today's hourly soil series for several points in one request
    pub async fn soil_series(&self, points: &[GpsCoordinates]) -> Result<Vec<SoilSeries>, FetchError> {
        let (latitudes, longitudes) = join_coordinates(points);
        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("latitude", latitudes),
                ("longitude", longitudes),
                (
                    "hourly",
                    "soil_moisture_0_to_7cm,soil_temperature_0cm,evapotranspiration".to_string(),
                ),
                ("timezone", TIMEZONE.to_string()),
                ("forecast_days", "1".to_string()),
            ])
            .send()
            .await?;

        let data: OneOrMany<SoilSeries> = decode_json(response).await?;
        Ok(data.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_at_fills_gaps_with_defaults() {
        let series = SoilSeries {
            hourly: HourlySoil {
                soil_moisture_0_to_7cm: vec![Some(0.31), None],
                soil_temperature_0cm: vec![Some(27.5)],
                evapotranspiration: vec![],
            },
        };

        let first = series.reading_at(0);
        assert_eq!(first.moisture, 0.31);
        assert_eq!(first.temperature_celsius, 27.5);
        assert_eq!(first.evapotranspiration_mm, 2.0);

        let second = series.reading_at(1);
        assert_eq!(second, SoilReading::default());
    }

    #[test]
    fn implausible_moisture_is_replaced() {
        let series = SoilSeries {
            hourly: HourlySoil {
                soil_moisture_0_to_7cm: vec![Some(31.0)],
                ..Default::default()
            },
        };
        assert_eq!(series.reading_at(0).moisture, 0.25);
    }

    #[test]
    fn soil_response_with_nulls_parses() {
        let body = r#"{"hourly": {"time": ["2024-06-01T00:00"], "soil_moisture_0_to_7cm": [null], "soil_temperature_0cm": [26.1], "evapotranspiration": [0.02]}}"#;
        let parsed: OneOrMany<SoilSeries> = serde_json::from_str(body).unwrap();
        let series = parsed.into_vec();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].reading_at(0).temperature_celsius, 26.1);
    }
}
