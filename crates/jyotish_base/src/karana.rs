//! Karana (half-tithi) classification.
//!
//! The synodic month holds 60 karana slots of 6 degrees of elongation
//! each: eleven types, seven movable and four fixed. Kimstughna owns the
//! opening slot (first half of Shukla Pratipada), the movable seven cycle
//! through slots 1-56 starting at Bava, and Shakuni, Chatushpada and Naga
//! close the month.

use serde::{Deserialize, Serialize};

use jyotish_math::normalize_360;

/// Degrees of elongation per karana.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garija,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The seven movable karanas in cycle order.
const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garija,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garija => "Garija",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// True for the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana in a given slot (0..59).
///
/// Slot 0 is Kimstughna; slots 1-56 cycle through the seven movable
/// karanas starting at Bava; slots 57-59 are Shakuni, Chatushpada, Naga.
pub fn karana_in_slot(slot: u8) -> Karana {
    match slot {
        0 => Karana::Kimstughna,
        1..=56 => MOVABLE[((slot - 1) % 7) as usize],
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        _ => Karana::Naga,
    }
}

/// Karana position derived from the phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaPosition {
    /// 0-based slot (0..59).
    pub index: u8,
    pub karana: Karana,
    /// Percentage of the karana already elapsed, [0, 100).
    pub completion_pct: f64,
}

/// Determine karana from the Moon-Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let index = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    let degrees_in = elong - f64::from(index) * KARANA_SEGMENT_DEG;
    KaranaPosition {
        index,
        karana: karana_in_slot(index),
        completion_pct: degrees_in / KARANA_SEGMENT_DEG * 100.0,
    }
}
