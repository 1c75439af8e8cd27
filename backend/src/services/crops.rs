//! Crop health from soil conditions in the agricultural districts

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::{agricultural_districts, CropHealthRecord, LocalClock, SoilReading, Sourced};
use tracing::warn;

use crate::external::OpenMeteoClient;

pub const SOIL_LIVE_SOURCE: &str = "Open-Meteo Agriculture API (Free)";
pub const SOIL_FALLBACK_SOURCE: &str = "AETHER Soil Simulation";

/// Crop signal service
#[derive(Clone)]
pub struct CropService {
    open_meteo: OpenMeteoClient,
}

impl CropService {
    pub fn new(open_meteo: OpenMeteoClient) -> Self {
        Self { open_meteo }
    }

    /// Crop health for every agricultural district
    pub async fn crop_health(&self, now: DateTime<Utc>) -> Sourced<Vec<CropHealthRecord>> {
        let districts = agricultural_districts();
        let points: Vec<_> = districts.iter().map(|d| d.coordinates()).collect();
        let clock = LocalClock::from_utc(now);

        match self.open_meteo.soil_series(&points).await {
            Ok(series) => {
                let records = districts
                    .iter()
                    .enumerate()
                    .map(|(index, district)| {
                        let reading = series
                            .get(index)
                            .map(|s| s.reading_at(clock.hour))
                            .unwrap_or_default();
                        CropHealthRecord::assess(district.name, district.crops, reading, now)
                    })
                    .collect();
                Sourced::live(records, SOIL_LIVE_SOURCE)
            }
            Err(err) => {
                warn!(source = SOIL_LIVE_SOURCE, error = %err, "Soil fetch failed, simulating soil conditions");
                let records = simulate_records(&mut rand::thread_rng(), clock, now);
                Sourced::fallback(records, SOIL_FALLBACK_SOURCE)
            }
        }
    }
}

/// Seasonal soil reading used when the soil series is unreachable
pub fn simulated_soil<R: Rng + ?Sized>(rng: &mut R, clock: LocalClock) -> SoilReading {
    let moisture = if clock.day_season().monsoon {
        rng.gen_range(0.30..0.45)
    } else {
        rng.gen_range(0.18..0.30)
    };
    SoilReading {
        moisture,
        temperature_celsius: rng.gen_range(22.0..32.0),
        evapotranspiration_mm: rng.gen_range(1.5..4.5),
    }
}

pub fn simulate_records<R: Rng + ?Sized>(
    rng: &mut R,
    clock: LocalClock,
    now: DateTime<Utc>,
) -> Vec<CropHealthRecord> {
    agricultural_districts()
        .into_iter()
        .map(|district| {
            CropHealthRecord::assess(district.name, district.crops, simulated_soil(rng, clock), now)
        })
        .collect()
}
