//! Configuration management for the AETHER monitor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AETHER_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream data sources
    pub sources: SourcesConfig,

    /// Seismic query region
    pub seismic: SeismicConfig,

    /// Dashboard polling loop
    pub polling: PollingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    /// USGS FDSN event service
    pub usgs_base_url: String,

    /// Open-Meteo forecast API
    pub open_meteo_base_url: String,

    /// wttr.in
    pub wttr_base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl SourcesConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeismicConfig {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_magnitude: f64,
    pub limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingConfig {
    /// Seconds between polling cycles
    pub interval_secs: u64,

    /// Disable to serve on-demand endpoints only
    pub enabled: bool,
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AETHER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::builder_with_defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AETHER_ prefix)
            .add_source(
                Environment::with_prefix("AETHER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Defaults only, without files or environment
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder_with_defaults("development")?
            .build()?
            .try_deserialize()
    }

    fn builder_with_defaults(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "sources.usgs_base_url",
                "https://earthquake.usgs.gov/fdsnws/event/1",
            )?
            .set_default("sources.open_meteo_base_url", "https://api.open-meteo.com/v1")?
            .set_default("sources.wttr_base_url", "https://wttr.in")?
            .set_default("sources.request_timeout_secs", 10)?
            .set_default("seismic.min_latitude", 15.0)?
            .set_default("seismic.max_latitude", 22.0)?
            .set_default("seismic.min_longitude", 72.0)?
            .set_default("seismic.max_longitude", 81.0)?
            .set_default("seismic.min_magnitude", 3.0)?
            .set_default("seismic.limit", 10)?
            .set_default("polling.interval_secs", 600)?
            .set_default("polling.enabled", true)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for SeismicConfig {
    fn default() -> Self {
        Self {
            min_latitude: 15.0,
            max_latitude: 22.0,
            min_longitude: 72.0,
            max_longitude: 81.0,
            min_magnitude: 3.0,
            limit: 10,
        }
    }
}
