//! Signal services for the AETHER Maharashtra monitor
//!
//! Every service absorbs upstream failures and returns substitute data
//! tagged as a fallback; none of them return errors.

pub mod aggregation;
pub mod alerts;
pub mod crops;
pub mod forecast;
pub mod health;
pub mod poller;
pub mod reasoning;
pub mod weather;

use reqwest::Client;

pub use aggregation::run_cycle;
pub use alerts::{AlertFeed, AlertService};
pub use crops::CropService;
pub use forecast::ForecastService;
pub use health::HealthService;
pub use poller::{Poller, SnapshotStore};
pub use reasoning::ReasoningService;
pub use weather::WeatherService;

use crate::config::Config;
use crate::external::{OpenMeteoClient, UsgsClient, WttrClient};

/// All services, sharing one HTTP client
#[derive(Clone)]
pub struct Services {
    pub weather: WeatherService,
    pub alerts: AlertService,
    pub health: HealthService,
    pub crops: CropService,
    pub forecast: ForecastService,
    pub reasoning: ReasoningService,
}

impl Services {
    pub fn new(client: Client, config: &Config) -> Self {
        let open_meteo = OpenMeteoClient::new(client.clone(), &config.sources.open_meteo_base_url);
        let usgs = UsgsClient::new(client.clone(), &config.sources.usgs_base_url);
        let wttr = WttrClient::new(client, &config.sources.wttr_base_url);

        Self {
            weather: WeatherService::new(),
            alerts: AlertService::new(usgs, open_meteo.clone(), config.seismic.clone()),
            health: HealthService::new(open_meteo.clone()),
            crops: CropService::new(open_meteo),
            forecast: ForecastService::new(wttr),
            reasoning: ReasoningService::new(),
        }
    }
}
