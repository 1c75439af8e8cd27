//! Disease outbreak risk for every registry district
//!
//! Inputs are current air temperature and humidity from Open-Meteo. When
//! that call fails, a seasonal simulation supplies the inputs instead; the
//! classifier is the same either way.

use chrono::{DateTime, Utc};
use shared::{all_districts, District, HealthRiskRecord, LocalClock, Sourced};
use tracing::warn;

use crate::external::open_meteo::CurrentAir;
use crate::external::OpenMeteoClient;

pub const HEALTH_LIVE_SOURCE: &str = "AETHER Disease Surveillance (Open-Meteo)";
pub const HEALTH_SIMULATED_SOURCE: &str = "AETHER Disease Surveillance (WHO/HDX Logic)";

/// Health signal service
#[derive(Clone)]
pub struct HealthService {
    open_meteo: OpenMeteoClient,
}

impl HealthService {
    pub fn new(open_meteo: OpenMeteoClient) -> Self {
        Self { open_meteo }
    }

    /// Health risk records for all districts
    pub async fn health_risks(&self, now: DateTime<Utc>) -> Sourced<Vec<HealthRiskRecord>> {
        let districts = all_districts();
        let points: Vec<_> = districts.iter().map(District::coordinates).collect();

        match self.open_meteo.current_air(&points).await {
            Ok(readings) => {
                let records = districts
                    .iter()
                    .zip(readings)
                    .map(|(district, air)| assess_air(district, air, now))
                    .collect();
                Sourced::live(records, HEALTH_LIVE_SOURCE)
            }
            Err(err) => {
                warn!(error = %err, "Air conditions fetch failed, simulating health inputs");
                Sourced::fallback(simulate_records(LocalClock::from_utc(now), now), HEALTH_SIMULATED_SOURCE)
            }
        }
    }
}

fn assess_air(district: &District, air: CurrentAir, now: DateTime<Utc>) -> HealthRiskRecord {
    HealthRiskRecord::assess(
        district.name,
        air.temperature_celsius,
        shared::clamp_percent(air.humidity_percent),
        district.coastal,
        now,
    )
}

/// Seasonal temperature and humidity for the district at registry `index`
pub fn simulated_conditions(district: &District, index: usize, clock: LocalClock) -> (f64, f64) {
    let season = clock.day_season();

    let mut base_temp = 28.0 + (index % 5) as f64 * 1.5;
    if season.summer {
        base_temp += 10.0;
    }
    if season.winter {
        base_temp -= 8.0;
    }
    if season.monsoon {
        base_temp -= 3.0;
    }
    let temperature = base_temp + clock.diurnal_factor() * 6.0;

    let mut humidity: f64 = if district.coastal { 78.0 } else { 55.0 };
    if season.monsoon {
        humidity += 22.0;
    }
    if season.winter {
        humidity -= 18.0;
    }
    humidity = (humidity + ((index * 4) % 12) as f64).clamp(25.0, 98.0);

    (temperature, humidity)
}

pub fn simulate_records(clock: LocalClock, now: DateTime<Utc>) -> Vec<HealthRiskRecord> {
    all_districts()
        .iter()
        .enumerate()
        .map(|(index, district)| {
            let (temperature, humidity) = simulated_conditions(district, index, clock);
            HealthRiskRecord::assess(district.name, temperature, humidity, district.coastal, now)
        })
        .collect()
}
