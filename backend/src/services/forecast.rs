//! City forecasts from wttr.in with a synthetic week on failure

use chrono::{DateTime, Days, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{local_time, round_to, CityForecast, ForecastDay, Sourced};
use tracing::warn;

use crate::external::wttr::WTTR_SOURCE;
use crate::external::WttrClient;

pub const FORECAST_FALLBACK_SOURCE: &str = "AETHER Fallback";
pub const DEFAULT_CITY: &str = "Mumbai";

const FALLBACK_DAYS: u64 = 7;
const FALLBACK_CONDITIONS: [&str; 4] = ["Clear", "Partly Cloudy", "Cloudy", "Rain"];
const FALLBACK_ICON: &str = "☀️";

/// Forecast service
#[derive(Clone)]
pub struct ForecastService {
    wttr: WttrClient,
}

impl ForecastService {
    pub fn new(wttr: WttrClient) -> Self {
        Self { wttr }
    }

    /// Forecast for `city`; blank names use the default city
    pub async fn forecast(&self, city: &str, now: DateTime<Utc>) -> Sourced<CityForecast> {
        let city = match city.trim() {
            "" => DEFAULT_CITY,
            trimmed => trimmed,
        };

        match self.wttr.forecast(city).await {
            Ok(forecast) => Sourced::live(forecast, WTTR_SOURCE),
            Err(err) => {
                warn!(city, source = WTTR_SOURCE, error = %err, "Forecast fetch failed, using synthetic week");
                let forecast = fallback_forecast(&mut rand::thread_rng(), city, now);
                Sourced::fallback(forecast, FORECAST_FALLBACK_SOURCE)
            }
        }
    }
}

/// Seven synthetic days starting today, without current conditions
pub fn fallback_forecast<R: Rng + ?Sized>(rng: &mut R, city: &str, now: DateTime<Utc>) -> CityForecast {
    let today = local_time(now).date_naive();
    let forecast = (0..FALLBACK_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| ForecastDay {
            date,
            max_temp: rng.gen_range(32..=36) as f64,
            min_temp: rng.gen_range(24..=27) as f64,
            condition: FALLBACK_CONDITIONS
                .choose(&mut *rng)
                .copied()
                .unwrap_or("Clear")
                .to_string(),
            rainfall: round_to(rng.gen_range(0.0..20.0), 1),
            humidity: rng.gen_range(60..=84) as f64,
            icon: FALLBACK_ICON.to_string(),
        })
        .collect();

    CityForecast {
        district: city.to_string(),
        forecast,
        current: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fallback_week_is_consecutive_and_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let now = Utc.with_ymd_and_hms(2024, 12, 28, 20, 0, 0).unwrap();
        let result = fallback_forecast(&mut rng, "Nagpur", now);

        assert_eq!(result.district, "Nagpur");
        assert!(result.current.is_none());
        assert_eq!(result.forecast.len(), 7);
        // 20:00 UTC is already the next day in India
        assert_eq!(result.forecast[0].date.to_string(), "2024-12-29");
        assert_eq!(result.forecast[6].date.to_string(), "2025-01-04");

        for day in &result.forecast {
            assert!((32.0..=36.0).contains(&day.max_temp));
            assert!((24.0..=27.0).contains(&day.min_temp));
            assert!((60.0..=84.0).contains(&day.humidity));
            assert!(FALLBACK_CONDITIONS.contains(&day.condition.as_str()));
        }
    }
}
