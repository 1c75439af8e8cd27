//! Season and local-time helpers for the synthetic signal models

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

/// India Standard Time, UTC+05:30
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 1800;

/// Convert a UTC instant to Maharashtra local time
pub fn local_time(now: DateTime<Utc>) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset)
}

/// Season flags. At most one is set; transition periods set none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonFlags {
    pub monsoon: bool,
    pub summer: bool,
    pub winter: bool,
}

impl SeasonFlags {
    /// Calendar-month seasons: monsoon Jun-Sep, summer Mar-May, winter Nov-Feb.
    /// `month` is 1-based.
    pub fn from_month(month: u32) -> Self {
        Self {
            monsoon: (6..=9).contains(&month),
            summer: (3..=5).contains(&month),
            winter: month >= 11 || month <= 2,
        }
    }

    /// Day-of-year seasons used by the soil and health models.
    /// `day_of_year` is 1-based (1 January is day 1).
    pub fn from_day_of_year(day_of_year: u32) -> Self {
        Self {
            monsoon: day_of_year > 150 && day_of_year < 270,
            summer: day_of_year > 90 && day_of_year < 150,
            winter: day_of_year < 60 || day_of_year > 320,
        }
    }
}

/// Local clock reading consumed by the simulations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    pub hour: u32,
    pub month: u32,
    pub day_of_year: u32,
}

impl LocalClock {
    pub fn from_utc(now: DateTime<Utc>) -> Self {
        let local = local_time(now);
        Self {
            hour: local.hour(),
            month: local.month(),
            day_of_year: local.ordinal(),
        }
    }

    pub fn month_season(&self) -> SeasonFlags {
        SeasonFlags::from_month(self.month)
    }

    pub fn day_season(&self) -> SeasonFlags {
        SeasonFlags::from_day_of_year(self.day_of_year)
    }

    /// Diurnal sine wave peaking at 12:00 and bottoming at 00:00, in [-1, 1]
    pub fn diurnal_factor(&self) -> f64 {
        ((self.hour as f64 - 6.0) * std::f64::consts::PI / 12.0).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn month_seasons() {
        assert!(SeasonFlags::from_month(7).monsoon);
        assert!(SeasonFlags::from_month(4).summer);
        assert!(SeasonFlags::from_month(1).winter);
        assert!(SeasonFlags::from_month(12).winter);
        assert_eq!(SeasonFlags::from_month(10), SeasonFlags::default());
    }

    #[test]
    fn day_of_year_boundaries_are_exclusive() {
        assert!(!SeasonFlags::from_day_of_year(150).monsoon);
        assert!(SeasonFlags::from_day_of_year(151).monsoon);
        assert!(!SeasonFlags::from_day_of_year(270).monsoon);
        assert!(SeasonFlags::from_day_of_year(59).winter);
        assert!(!SeasonFlags::from_day_of_year(60).winter);
        assert!(SeasonFlags::from_day_of_year(321).winter);
    }

    #[test]
    fn clock_uses_indian_standard_time() {
        // 20:00 UTC on 31 May is 01:30 on 1 June in IST
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 20, 0, 0).unwrap();
        let clock = LocalClock::from_utc(now);
        assert_eq!(clock.hour, 1);
        assert_eq!(clock.month, 6);
        assert!(clock.month_season().monsoon);
    }

    #[test]
    fn diurnal_factor_peaks_at_noon() {
        let noon = LocalClock { hour: 12, month: 1, day_of_year: 1 };
        let midnight = LocalClock { hour: 0, month: 1, day_of_year: 1 };
        assert!((noon.diurnal_factor() - 1.0).abs() < 1e-9);
        assert!((midnight.diurnal_factor() + 1.0).abs() < 1e-9);
    }
}
