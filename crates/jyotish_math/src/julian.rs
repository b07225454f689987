//! Julian Date ↔ calendar conversions and weekday extraction.
//!
//! Algorithms from Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7.
//! Implementation is original. Dates are proleptic Gregorian.

/// J2000.0 epoch as Julian Date (2000-Jan-01 12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may be fractional (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let jd_int = (365.25 * (f64::from(y) + 4716.0)).floor();
    let jd_month = (30.6001 * (f64::from(m) + 1.0)).floor();

    jd_int + jd_month + day + f64::from(b) - 1524.5
}

/// Convert a Julian Date to Gregorian calendar date.
///
/// Returns `(year, month, day)` where `day` is fractional.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_plus = jd + 0.5;
    let z = jd_plus.floor() as i64;
    let f = jd_plus - z as f64;

    let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
    let a = z + 1 + alpha - alpha.div_euclid(4);

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d) as f64 - (30.6001 * e as f64).floor() + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day)
}

/// Convert civil date-time plus a UTC offset (signed minutes) to JD in UT.
///
/// The civil wall-clock fields are interpreted in the zone given by
/// `utc_offset_min`; the result is the corresponding UT instant.
pub fn civil_to_jd_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_min: i32,
) -> f64 {
    let day_fraction = f64::from(day)
        + (f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0) / 24.0;
    calendar_to_jd(year, month, day_fraction) - f64::from(utc_offset_min) / 1440.0
}

/// Convert a JD in UT back to civil date-time fields in the given zone.
///
/// Returns `(year, month, day, hour, minute, second)`. Seconds within
/// half a millisecond of a whole value are snapped to it, which absorbs
/// the JD rounding error so whole-minute inputs do not drift across the
/// minute boundary.
pub fn jd_utc_to_civil(jd_utc: f64, utc_offset_min: i32) -> (i32, u32, u32, u32, u32, f64) {
    let (year, month, day_frac) = jd_to_calendar(jd_utc + f64::from(utc_offset_min) / 1440.0);
    let day = day_frac.floor() as u32;
    let mut seconds_of_day = (day_frac - f64::from(day)) * SECONDS_PER_DAY;
    let snapped = seconds_of_day.round();
    if (seconds_of_day - snapped).abs() < 5e-4 {
        seconds_of_day = snapped.min(SECONDS_PER_DAY - 1.0);
    }
    let hour = (seconds_of_day / 3600.0).floor() as u32;
    let minute = ((seconds_of_day - f64::from(hour) * 3600.0) / 60.0).floor() as u32;
    let second = seconds_of_day - f64::from(hour) * 3600.0 - f64::from(minute) * 60.0;
    (year, month, day, hour, minute, second)
}

/// Weekday of the civil day containing `jd`, 0 = Sunday .. 6 = Saturday.
///
/// Standard JD formula: `(floor(jd + 1.5)) mod 7` with 0 = Sunday.
pub fn weekday_from_jd(jd: f64) -> u8 {
    let jdn = (jd + 0.5).floor() as i64;
    (((jdn + 1) % 7 + 7) % 7) as u8
}

/// Convert a Sunday-indexed weekday (0 = Sunday) to Monday-indexed form
/// (0 = Monday), the convention used by the muhurta period selectors.
pub fn monday_indexed_weekday(sunday_indexed: u8) -> u8 {
    (sunday_indexed + 6) % 7
}
