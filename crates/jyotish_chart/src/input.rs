//! Chart input: civil date-time, UTC offset, location, and scheme tags.

use serde::{Deserialize, Serialize};

use jyotish_ephem::{Ayanamsha, GeoLocation, HouseSystem};
use jyotish_math::civil_to_jd_utc;

use crate::error::ChartError;

/// Civil date-time with a signed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Signed UTC offset in minutes (+330 = +05:30).
    pub utc_offset_min: i32,
}

impl CivilDateTime {
    /// Validate field ranges and produce the JD (UT).
    ///
    /// Years below 1 are rejected here; earlier dates are only meaningful
    /// where the ephemeris provider covers them, and the proleptic
    /// Gregorian conversion below year 1 is not supported.
    pub fn to_jd_utc(&self) -> Result<f64, ChartError> {
        if self.year < 1 {
            return Err(ChartError::BadInput("year"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::BadInput("month"));
        }
        if !(1..=31).contains(&self.day) || self.day > days_in_month(self.year, self.month) {
            return Err(ChartError::BadInput("day"));
        }
        if self.hour > 23 {
            return Err(ChartError::BadInput("hour"));
        }
        if self.minute > 59 {
            return Err(ChartError::BadInput("minute"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(ChartError::BadInput("second"));
        }
        if !(-14 * 60..=14 * 60).contains(&self.utc_offset_min) {
            return Err(ChartError::BadInput("utc_offset"));
        }
        Ok(civil_to_jd_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_min,
        ))
    }

    /// Parse a `±HH:MM` offset string into signed minutes.
    pub fn parse_offset(tz: &str) -> Result<i32, ChartError> {
        let (sign, rest) = match tz.as_bytes().first() {
            Some(b'+') => (1, &tz[1..]),
            Some(b'-') => (-1, &tz[1..]),
            _ => return Err(ChartError::BadInput("utc_offset")),
        };
        let mut parts = rest.split(':');
        let hours: i32 = parts
            .next()
            .and_then(|h| h.parse().ok())
            .ok_or(ChartError::BadInput("utc_offset"))?;
        let minutes: i32 = parts
            .next()
            .and_then(|m| m.parse().ok())
            .ok_or(ChartError::BadInput("utc_offset"))?;
        if parts.next().is_some() || hours > 14 || minutes > 59 {
            return Err(ChartError::BadInput("utc_offset"));
        }
        Ok(sign * (hours * 60 + minutes))
    }
}

/// Complete chart request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub datetime: CivilDateTime,
    pub geo: GeoLocation,
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
}

impl ChartInput {
    /// Default Vedic configuration: Lahiri ayanamsha, whole-sign houses.
    pub fn vedic(datetime: CivilDateTime, geo: GeoLocation) -> Self {
        Self {
            datetime,
            geo,
            ayanamsha: Ayanamsha::Lahiri,
            house_system: HouseSystem::WholeSign,
        }
    }

    /// Default KP configuration: Krishnamurti ayanamsha, Placidus houses.
    pub fn kp(datetime: CivilDateTime, geo: GeoLocation) -> Self {
        Self {
            datetime,
            geo,
            ayanamsha: Ayanamsha::Krishnamurti,
            house_system: HouseSystem::Placidus,
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bengaluru() -> GeoLocation {
        GeoLocation::new(12.9716, 77.5946, 0.0).unwrap()
    }

    fn seed_datetime() -> CivilDateTime {
        CivilDateTime {
            year: 2025,
            month: 4,
            day: 9,
            hour: 20,
            minute: 51,
            second: 0.0,
            utc_offset_min: 330,
        }
    }

    #[test]
    fn valid_datetime_converts() {
        let jd = seed_datetime().to_jd_utc().unwrap();
        // 2025-04-09 15:21 UT
        let expected = jyotish_math::calendar_to_jd(2025, 4, 9.0 + (15.0 + 21.0 / 60.0) / 24.0);
        assert!((jd - expected).abs() < 1e-9);
    }

    #[test]
    fn invalid_fields_name_themselves() {
        let mut d = seed_datetime();
        d.month = 13;
        assert_eq!(d.to_jd_utc(), Err(ChartError::BadInput("month")));
        let mut d = seed_datetime();
        d.day = 31; // April has 30
        assert_eq!(d.to_jd_utc(), Err(ChartError::BadInput("day")));
        let mut d = seed_datetime();
        d.hour = 24;
        assert_eq!(d.to_jd_utc(), Err(ChartError::BadInput("hour")));
        let mut d = seed_datetime();
        d.year = 0;
        assert_eq!(d.to_jd_utc(), Err(ChartError::BadInput("year")));
    }

    #[test]
    fn leap_february() {
        let mut d = seed_datetime();
        d.month = 2;
        d.day = 29;
        d.year = 2024;
        assert!(d.to_jd_utc().is_ok());
        d.year = 2025;
        assert_eq!(d.to_jd_utc(), Err(ChartError::BadInput("day")));
    }

    #[test]
    fn offset_parsing() {
        assert_eq!(CivilDateTime::parse_offset("+05:30").unwrap(), 330);
        assert_eq!(CivilDateTime::parse_offset("-08:00").unwrap(), -480);
        assert!(CivilDateTime::parse_offset("05:30").is_err());
        assert!(CivilDateTime::parse_offset("+5").is_err());
        assert!(CivilDateTime::parse_offset("+15:00").is_err());
    }

    #[test]
    fn defaults_per_tradition() {
        let v = ChartInput::vedic(seed_datetime(), bengaluru());
        assert_eq!(v.ayanamsha, Ayanamsha::Lahiri);
        assert_eq!(v.house_system, HouseSystem::WholeSign);
        let k = ChartInput::kp(seed_datetime(), bengaluru());
        assert_eq!(k.ayanamsha, Ayanamsha::Krishnamurti);
        assert_eq!(k.house_system, HouseSystem::Placidus);
    }
}
