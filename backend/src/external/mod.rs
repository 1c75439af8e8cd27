//! External API integrations
//!
//! Thin clients for the public upstreams. Each returns a [`FetchError`] on
//! failure; callers in `services` decide what fallback to substitute.

pub mod open_meteo;
pub mod usgs;
pub mod wttr;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub use open_meteo::OpenMeteoClient;
pub use usgs::UsgsClient;
pub use wttr::WttrClient;

/// Upstream fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

/// Build the shared HTTP client used by every upstream
pub fn http_client(timeout: Duration) -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("aether-monitor/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Check the status and decode a JSON body
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Open-Meteo answers multi-location queries with an array and
/// single-location queries with a bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_many_accepts_both_shapes() {
        let many: OneOrMany<u32> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(many.into_vec(), vec![1, 2]);
        let one: OneOrMany<u32> = serde_json::from_str("7").unwrap();
        assert_eq!(one.into_vec(), vec![7]);
    }
}
