//! Tithi (lunar day) classification.
//!
//! The synodic month is divided into 30 tithis, each spanning 12 degrees of
//! Moon-Sun elongation. Shukla Paksha (bright half) runs over 0-180 degrees
//! (tithis 0-14), Krishna Paksha (dark half) over 180-360 (tithis 15-29).

use serde::{Deserialize, Serialize};

use jyotish_math::normalize_360;

/// Degrees of elongation per tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// The two pakshas (fortnights) of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Bright half (waxing moon), elongation 0-180 deg.
    Shukla,
    /// Dark half (waning moon), elongation 180-360 deg.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within a paksha; the 15th is Purnima in the bright half and
/// Amavasya in the dark half.
const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// Tithi position derived from the phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiPosition {
    /// 0-based tithi index (0..29).
    pub index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub number_in_paksha: u8,
    /// Percentage of the tithi already elapsed, [0, 100).
    pub completion_pct: f64,
}

impl TithiPosition {
    /// Traditional name ("Shukla Ashtami", "Amavasya", ...).
    pub fn name(&self) -> String {
        let base = TITHI_NAMES[(self.number_in_paksha - 1) as usize];
        match (self.paksha, self.number_in_paksha) {
            (Paksha::Shukla, 15) => "Purnima".to_string(),
            (Paksha::Krishna, 15) => "Amavasya".to_string(),
            (p, _) => format!("{} {}", p.name(), base),
        }
    }
}

/// Determine tithi from the Moon-Sun elongation.
///
/// Elongation = (Moon_lon - Sun_lon) mod 360 in degrees; each tithi spans
/// 12 degrees. Ayanamsha cancels in the difference. Monotone over [0, 360).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let index = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let degrees_in = elong - f64::from(index) * TITHI_SEGMENT_DEG;
    TithiPosition {
        index,
        paksha: if index < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        },
        number_in_paksha: index % 15 + 1,
        completion_pct: degrees_in / TITHI_SEGMENT_DEG * 100.0,
    }
}
