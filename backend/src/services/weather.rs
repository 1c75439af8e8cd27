//! Synthetic weather for every registry district
//!
//! No upstream is involved. The climate model derives a plausible reading
//! from latitude, season and hour; if it cannot produce a valid reading the
//! service falls back to uniform random values. Both paths are synthetic.

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::{
    all_districts, classify_sky, round_to, validate_coordinates, District, LocalClock, Sourced,
    ValidationError, WeatherReading,
};
use tracing::warn;

pub const CLIMATE_MODEL_SOURCE: &str = "AETHER Climate Model";
pub const FALLBACK_MODEL_SOURCE: &str = "AETHER Fallback Model";

const FALLBACK_CONDITION: &str = "Partly Cloudy";
const FALLBACK_WEATHER_CODE: u8 = 2;

/// Weather signal service
#[derive(Clone, Default)]
pub struct WeatherService;

impl WeatherService {
    pub fn new() -> Self {
        Self
    }

    /// Readings for all districts using the thread-local RNG
    pub fn current_readings(&self, now: DateTime<Utc>) -> Sourced<Vec<WeatherReading>> {
        self.readings_with(&mut rand::thread_rng(), now)
    }

    /// Readings for all districts, drawing randomness from `rng`
    pub fn readings_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Sourced<Vec<WeatherReading>> {
        let clock = LocalClock::from_utc(now);
        let modelled = all_districts()
            .iter()
            .map(|district| climate_model_reading(district, clock, now, rng))
            .collect::<Result<Vec<_>, _>>();

        match modelled {
            Ok(readings) => Sourced::live(readings, CLIMATE_MODEL_SOURCE),
            Err(err) => {
                warn!(error = %err, "Climate model failed, using fallback weather");
                let readings = all_districts()
                    .iter()
                    .map(|district| fallback_reading(district, now, rng))
                    .collect();
                Sourced::fallback(readings, FALLBACK_MODEL_SOURCE)
            }
        }
    }
}

/// Uniform jitter in `[-half_width, half_width)`
fn jitter<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0 * half_width
}

/// Seasonal climate model reading for one district
pub fn climate_model_reading<R: Rng + ?Sized>(
    district: &District,
    clock: LocalClock,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<WeatherReading, ValidationError> {
    validate_coordinates(district.coordinates())?;

    let season = clock.month_season();

    // North of the state runs cooler; 0 at 16°N, 1 at 21°N
    let lat_factor = (district.latitude - 16.0) / 5.0;
    let mut base_temp = 28.0 - lat_factor * 3.0;
    if season.summer {
        base_temp += 6.0;
    } else if season.winter {
        base_temp -= 4.0;
    } else if season.monsoon {
        base_temp -= 2.0;
    }
    let temperature = base_temp + clock.diurnal_factor() * 5.0 + jitter(rng, 1.0);

    let mut humidity = 55.0;
    if district.coastal {
        humidity += 15.0;
    }
    if season.monsoon {
        humidity += 20.0;
    }
    humidity = (humidity + jitter(rng, 7.5)).clamp(30.0, 95.0);

    let rainfall = if season.monsoon {
        let rain = if rng.gen_bool(0.6) {
            rng.gen_range(0.0..25.0)
        } else {
            0.0
        };
        if district.coastal {
            rain * 1.5
        } else {
            rain
        }
    } else if rng.gen_bool(0.1) {
        rng.gen_range(0.0..5.0)
    } else {
        0.0
    };

    let wind_speed = 5.0 + rng.gen_range(0.0..15.0) + if district.coastal { 5.0 } else { 0.0 };

    shared::validate_temperature(temperature)?;
    shared::validate_humidity(humidity)?;

    let sky = classify_sky(rainfall, humidity);

    Ok(WeatherReading {
        district: district.name.to_string(),
        latitude: district.latitude,
        longitude: district.longitude,
        rainfall_mm: round_to(rainfall, 1),
        temperature_celsius: round_to(temperature, 1),
        humidity_percent: humidity.round(),
        wind_speed_kmh: round_to(wind_speed, 1),
        condition: sky.label().to_string(),
        weather_code: sky.wmo_code(),
        timestamp: now,
    })
}

/// Last-resort reading with no seasonal structure
pub fn fallback_reading<R: Rng + ?Sized>(
    district: &District,
    now: DateTime<Utc>,
    rng: &mut R,
) -> WeatherReading {
    WeatherReading {
        district: district.name.to_string(),
        latitude: district.latitude,
        longitude: district.longitude,
        rainfall_mm: round_to(rng.gen_range(0.0..30.0), 1),
        temperature_celsius: round_to(rng.gen_range(26.0..36.0), 1),
        humidity_percent: rng.gen_range(55.0_f64..90.0).round(),
        wind_speed_kmh: round_to(rng.gen_range(5.0..25.0), 1),
        condition: FALLBACK_CONDITION.to_string(),
        weather_code: FALLBACK_WEATHER_CODE,
        timestamp: now,
    }
}
