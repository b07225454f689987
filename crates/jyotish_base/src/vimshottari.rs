//! Vimshottari dasha cycle: lord order, period lengths, and the running
//! mahadasha/antardasha at an arbitrary instant.
//!
//! The 120-year cycle assigns each of 9 lords a fixed period. The opening
//! balance at birth is proportional to the Moon's remaining arc in its
//! janma nakshatra. The same proportions recursively partition each
//! mahadasha into antardashas, which is also the scheme behind the KP
//! sub-lord partition of the zodiac.

use serde::{Deserialize, Serialize};

use jyotish_math::normalize_360;

use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN;

/// The 9 Vimshottari lords in cycle order, starting from Ketu (Ashwini).
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Dasha years per lord, in cycle order. Sum = 120.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Days per dasha year (sidereal-year convention used by the original
/// implementation: 365.25).
pub const DAYS_PER_DASHA_YEAR: f64 = 365.25;

/// Position of a lord in the Vimshottari cycle (0..8).
pub fn cycle_index(lord: Graha) -> Option<u8> {
    VIMSHOTTARI_LORDS
        .iter()
        .position(|&g| g == lord)
        .map(|i| i as u8)
}

/// Dasha years of a single lord. Returns None for bodies outside the cycle
/// (the cycle covers all 9 grahas, so this is None only for future
/// extended bodies).
pub fn dasha_years(lord: Graha) -> Option<f64> {
    cycle_index(lord).map(|i| VIMSHOTTARI_YEARS[i as usize])
}

/// A running dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// JD (UT) at which the period begins.
    pub start_jd: f64,
    /// JD (UT) at which the period ends.
    pub end_jd: f64,
}

/// Mahadasha + antardasha in effect at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaState {
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
}

/// Compute the dasha state at `target_jd` from the natal Moon.
///
/// `natal_moon_lon` is the sidereal Moon longitude at `birth_jd`. The birth
/// nakshatra's lord opens the sequence with a balance proportional to the
/// arc left in the nakshatra.
pub fn dasha_state_at(natal_moon_lon: f64, birth_jd: f64, target_jd: f64) -> DashaState {
    let lon = normalize_360(natal_moon_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let frac_elapsed = (lon - nak_idx as f64 * NAKSHATRA_SPAN) / NAKSHATRA_SPAN;

    let first = nak_idx % 9;
    let first_years = VIMSHOTTARI_YEARS[first];
    let balance_years = first_years * (1.0 - frac_elapsed);

    // Walk mahadashas from birth until the target falls inside one.
    let mut start = birth_jd;
    let mut k = first;
    let mut span_years = balance_years;
    let maha = loop {
        let end = start + span_years * DAYS_PER_DASHA_YEAR;
        if target_jd < end || (k == first && target_jd < start) {
            // Anchor the full period so antardasha proportions are correct:
            // the opening balance belongs to a period that began before birth.
            let full_days = VIMSHOTTARI_YEARS[k] * DAYS_PER_DASHA_YEAR;
            break DashaPeriod {
                lord: VIMSHOTTARI_LORDS[k],
                start_jd: end - full_days,
                end_jd: end,
            };
        }
        start = end;
        k = (k + 1) % 9;
        span_years = VIMSHOTTARI_YEARS[k];
    };

    // Antardashas partition the mahadasha in cycle order from its own lord.
    let maha_days = maha.end_jd - maha.start_jd;
    let maha_idx = cycle_index(maha.lord).unwrap_or(0) as usize;
    let mut a_start = maha.start_jd;
    let mut antar = DashaPeriod {
        lord: maha.lord,
        start_jd: maha.start_jd,
        end_jd: maha.end_jd,
    };
    for j in 0..9 {
        let idx = (maha_idx + j) % 9;
        let a_days = maha_days * VIMSHOTTARI_YEARS[idx] / VIMSHOTTARI_TOTAL_YEARS;
        let a_end = a_start + a_days;
        if target_jd < a_end || j == 8 {
            antar = DashaPeriod {
                lord: VIMSHOTTARI_LORDS[idx],
                start_jd: a_start,
                end_jd: a_end,
            };
            break;
        }
        a_start = a_end;
    }

    DashaState {
        mahadasha: maha,
        antardasha: antar,
    }
}
