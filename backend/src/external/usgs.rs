//! USGS earthquake catalogue client
//!
//! Queries the FDSN event service for recent events inside a bounding box.
//! No API key is required.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::{decode_json, FetchError};
use crate::config::SeismicConfig;

pub const USGS_SOURCE: &str = "USGS";

/// USGS client
#[derive(Clone)]
pub struct UsgsClient {
    client: Client,
    base_url: String,
}

/// A recent seismic event
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicEvent {
    pub id: String,
    pub title: String,
    pub place: String,
    pub magnitude: f64,
    pub time: DateTime<Utc>,
    /// `[longitude, latitude, depth_km]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    id: String,
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

impl UsgsClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the most recent events matching the query, newest first
    pub async fn recent_events(&self, query: &SeismicConfig) -> Result<Vec<SeismicEvent>, FetchError> {
        let url = format!("{}/query", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "geojson".to_string()),
                ("minlatitude", query.min_latitude.to_string()),
                ("maxlatitude", query.max_latitude.to_string()),
                ("minlongitude", query.min_longitude.to_string()),
                ("maxlongitude", query.max_longitude.to_string()),
                ("minmagnitude", query.min_magnitude.to_string()),
                ("limit", query.limit.to_string()),
                ("orderby", "time".to_string()),
            ])
            .send()
            .await?;

        let collection: FeatureCollection = decode_json(response).await?;
        Ok(collection
            .features
            .into_iter()
            .filter_map(convert_feature)
            .collect())
    }
}

/// Events without a magnitude cannot be classified and are skipped
fn convert_feature(feature: Feature) -> Option<SeismicEvent> {
    let magnitude = feature.properties.mag?;
    let place = feature.properties.place.unwrap_or_default();
    let title = feature
        .properties
        .title
        .unwrap_or_else(|| format!("M {} - {}", magnitude, place));

    Some(SeismicEvent {
        id: feature.id,
        title,
        place,
        magnitude,
        time: feature
            .properties
            .time
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_else(Utc::now),
        coordinates: feature.geometry.map(|g| g.coordinates).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geojson_features() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "id": "us7000abcd",
                    "properties": {"mag": 4.3, "place": "12 km SW of Koyna, India", "time": 1717200000000, "title": "M 4.3 - 12 km SW of Koyna, India"},
                    "geometry": {"type": "Point", "coordinates": [73.7, 17.3, 10.0]}
                },
                {
                    "id": "us7000none",
                    "properties": {"mag": null, "place": null, "time": null, "title": null},
                    "geometry": null
                }
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        let events: Vec<_> = collection.features.into_iter().filter_map(convert_feature).collect();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].magnitude, 4.3);
        assert_eq!(events[0].coordinates, vec![73.7, 17.3, 10.0]);
        assert_eq!(events[0].time.timestamp_millis(), 1_717_200_000_000);
    }
}
