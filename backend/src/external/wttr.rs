//! wttr.in forecast client
//!
//! The `j1` format reports every number as a string; anything that fails to
//! parse falls back to a per-field default instead of failing the request.

use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;
use shared::{round_to, weather_icon, CityForecast, CurrentConditions, ForecastDay};

use super::{decode_json, FetchError};

pub const WTTR_SOURCE: &str = "wttr.in (Free)";

/// Slot used for the representative daytime condition (12:00 of 3-hourly data)
const REPRESENTATIVE_SLOT: usize = 4;
const DEFAULT_WEATHER_CODE: &str = "113";

/// wttr.in client
#[derive(Clone)]
pub struct WttrClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    #[serde(default)]
    current_condition: Vec<WttrCurrent>,
    #[serde(default)]
    weather: Vec<WttrDay>,
}

#[derive(Debug, Deserialize)]
struct WttrCurrent {
    #[serde(rename = "temp_C")]
    temp_c: Option<String>,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: Option<String>,
    humidity: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<WttrText>,
}

#[derive(Debug, Deserialize)]
struct WttrDay {
    date: String,
    #[serde(rename = "maxtempC")]
    max_temp_c: Option<String>,
    #[serde(rename = "mintempC")]
    min_temp_c: Option<String>,
    #[serde(default)]
    hourly: Vec<WttrHour>,
}

#[derive(Debug, Deserialize)]
struct WttrHour {
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<WttrText>,
    #[serde(rename = "precipMM")]
    precip_mm: Option<String>,
    humidity: Option<String>,
    #[serde(rename = "weatherCode")]
    weather_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WttrText {
    value: String,
}

impl WttrClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn forecast_url(&self, city: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(&format!("{},Maharashtra", city));
        url.query_pairs_mut().append_pair("format", "j1");
        Ok(url)
    }

    /// Multi-day forecast plus current conditions for a city
    pub async fn forecast(&self, city: &str) -> Result<CityForecast, FetchError> {
        let url = self.forecast_url(city)?;
        let response = self.client.get(url).send().await?;
        let data: WttrResponse = decode_json(response).await?;
        convert_response(city, data)
    }
}

fn parse_number(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn first_text(texts: &[WttrText]) -> Option<&str> {
    texts.first().map(|t| t.value.as_str()).filter(|v| !v.is_empty())
}

fn convert_response(city: &str, data: WttrResponse) -> Result<CityForecast, FetchError> {
    let forecast = data
        .weather
        .iter()
        .map(convert_day)
        .collect::<Result<Vec<_>, _>>()?;

    let defaults = CurrentConditions::default();
    let current = match data.current_condition.first() {
        Some(c) => CurrentConditions {
            temp: parse_number(c.temp_c.as_deref(), defaults.temp),
            feels_like: parse_number(c.feels_like_c.as_deref(), defaults.feels_like),
            humidity: parse_number(c.humidity.as_deref(), defaults.humidity),
            condition: first_text(&c.weather_desc)
                .map(str::to_string)
                .unwrap_or(defaults.condition),
        },
        None => defaults,
    };

    Ok(CityForecast {
        district: city.to_string(),
        forecast,
        current: Some(current),
    })
}

fn convert_day(day: &WttrDay) -> Result<ForecastDay, FetchError> {
    let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
        .map_err(|e| FetchError::Decode(format!("bad forecast date {:?}: {}", day.date, e)))?;

    let slot = day.hourly.get(REPRESENTATIVE_SLOT);
    let total_rain: f64 = day
        .hourly
        .iter()
        .map(|h| parse_number(h.precip_mm.as_deref(), 0.0))
        .sum();
    let humidity = if day.hourly.is_empty() {
        0.0
    } else {
        day.hourly
            .iter()
            .map(|h| parse_number(h.humidity.as_deref(), 0.0))
            .sum::<f64>()
            / day.hourly.len() as f64
    };

    Ok(ForecastDay {
        date,
        max_temp: parse_number(day.max_temp_c.as_deref(), 0.0),
        min_temp: parse_number(day.min_temp_c.as_deref(), 0.0),
        condition: slot
            .and_then(|h| first_text(&h.weather_desc))
            .unwrap_or("Clear")
            .to_string(),
        rainfall: round_to(total_rain, 1),
        humidity: humidity.round(),
        icon: weather_icon(
            slot.and_then(|h| h.weather_code.as_deref())
                .unwrap_or(DEFAULT_WEATHER_CODE),
        )
        .to_string(),
    })
}
