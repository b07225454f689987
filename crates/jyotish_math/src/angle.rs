//! Circle arithmetic and DMS decomposition for ecliptic longitudes.

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const MEAN_OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed shortest arc from `a` to `b`, in (−180, +180] degrees.
pub fn closest_distance(a: f64, b: f64) -> f64 {
    let d = normalize_360(b - a);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Unsigned shortest arc between `a` and `b`, in [0, 180] degrees.
pub fn distance(a: f64, b: f64) -> f64 {
    closest_distance(a, b).abs()
}

/// 0-based rashi index (0 = Mesha) of a longitude.
///
/// Clamped to 11 for the floating-point edge at exactly 360.0.
pub fn sign_index_of(lon: f64) -> u8 {
    ((normalize_360(lon) / 30.0).floor() as u8).min(11)
}

/// Degrees within the sign, [0, 30).
pub fn sign_longitude(lon: f64) -> f64 {
    let l = normalize_360(lon);
    l - f64::from(sign_index_of(l)) * 30.0
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - f64::from(total_degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - f64::from(minutes)) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Declination of an ecliptic position, degrees.
///
/// `sin δ = sin β cos ε + cos β sin ε sin λ` with λ the ecliptic longitude,
/// β the ecliptic latitude, ε the obliquity (all degrees).
pub fn ecliptic_declination(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> f64 {
    let lam = lon_deg.to_radians();
    let beta = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin().to_degrees()
}
