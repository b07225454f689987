//! Graha drishti (planetary aspect) calculation.
//!
//! Two granularities share this module so callers never re-derive the rule:
//! the classical piecewise virupa strength over angular distance (used by
//! drik bala), and the whole-house Vedic aspect predicate (used by bhava
//! drishti and dosha cancellation). Mars additionally aspects the 4th/8th,
//! Jupiter the 5th/9th, Saturn the 3rd/10th; everyone aspects the 7th.

use jyotish_math::normalize_360;

use crate::graha::Graha;

/// Aspect strength for a single graha→target pair.
#[derive(Debug, Clone, Copy)]
pub struct DrishtiEntry {
    /// Angular distance from source to target in [0, 360).
    pub angular_distance: f64,
    /// Base virupa from the piecewise formula.
    pub base_virupa: f64,
    /// Planet-specific bonus (Mars/Jupiter/Saturn only).
    pub special_virupa: f64,
    /// Total virupa = base + special.
    pub total_virupa: f64,
}

impl DrishtiEntry {
    /// Zeroed sentinel entry.
    pub const fn zero() -> Self {
        Self {
            angular_distance: 0.0,
            base_virupa: 0.0,
            special_virupa: 0.0,
            total_virupa: 0.0,
        }
    }
}

/// Piecewise base virupa for a given angular distance.
///
/// - `[0, 30)`:    0
/// - `[30, 90)`:   `(A - 30) * 0.75`        → 0..45
/// - `[90, 150)`:  `45 - (A - 90) * 0.75`   → 45..0
/// - `[150, 180)`: `(A - 150) * 2`          → 0..60
/// - `[180, 300)`: `60 - (A - 180) * 0.5`   → 60..0
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Planet-specific bonus virupa for the special aspects.
///
/// - Mars: +15 in `[90, 120)` or `[210, 240)` (4th/8th)
/// - Jupiter: +30 in `[120, 150)` or `[240, 270)` (5th/9th)
/// - Saturn: +45 in `[60, 90)` or `[270, 300)` (3rd/10th)
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    match graha {
        Graha::Mangal => {
            if (90.0..120.0).contains(&a) || (210.0..240.0).contains(&a) {
                15.0
            } else {
                0.0
            }
        }
        Graha::Guru => {
            if (120.0..150.0).contains(&a) || (240.0..270.0).contains(&a) {
                30.0
            } else {
                0.0
            }
        }
        Graha::Shani => {
            if (60.0..90.0).contains(&a) || (270.0..300.0).contains(&a) {
                45.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Compute drishti from a single graha to a single sidereal point.
pub fn graha_drishti(graha: Graha, source_lon: f64, target_lon: f64) -> DrishtiEntry {
    let angular_distance = normalize_360(target_lon - source_lon);
    let base = base_virupa(angular_distance);
    let special = special_virupa(graha, angular_distance);
    DrishtiEntry {
        angular_distance,
        base_virupa: base,
        special_virupa: special,
        total_virupa: base + special,
    }
}

/// Whole-house Vedic aspect predicate.
///
/// `house_distance` is the 0-based sign count from the aspecting graha to
/// the target (0 = same sign). All grahas aspect the 7th (distance 6);
/// Mars adds 4th/8th (3, 7); Jupiter 5th/9th (4, 8); Saturn 3rd/10th (2, 9).
pub fn aspects_house(graha: Graha, house_distance: u8) -> bool {
    let d = house_distance % 12;
    if d == 6 {
        return true;
    }
    match graha {
        Graha::Mangal => d == 3 || d == 7,
        Graha::Guru => d == 4 || d == 8,
        Graha::Shani => d == 2 || d == 9,
        _ => false,
    }
}

/// Whole-house aspect between two longitudes.
pub fn aspects_point(graha: Graha, source_lon: f64, target_lon: f64) -> bool {
    let d = (jyotish_math::sign_index_of(target_lon) as i16
        - jyotish_math::sign_index_of(source_lon) as i16)
        .rem_euclid(12) as u8;
    aspects_house(graha, d)
}
