//! Ashtakavarga (benefic point) calculations.
//!
//! For each of the seven classical grahas and the lagna, eight
//! contributors (the seven grahas plus the lagna) credit bindus to the
//! rashis lying at fixed offsets from their own positions. Implements
//! bhinna ashtakavarga (BAV), sarvashtakavarga (SAV), the trikona and
//! ekadhipatya reductions, and the transit bindu strength buckets.
//!
//! The benefic-offset lists are the published Parashara tables; the
//! totals they force are chart-independent (Sun 48, Moon 49, Mars 39,
//! Mercury 54, Jupiter 56, Venus 52, Saturn 39, Lagna 49; SAV 337) and
//! are pinned by tests.

use serde::{Deserialize, Serialize};

use crate::graha::{SAPTA_GRAHAS, rashi_lord_by_index};

/// Benefic offsets credited to each target: 1-based counts from the
/// contributor's rashi (1 = the contributor's own sign).
///
/// `BENEFIC_OFFSETS[target][contributor]`; targets and contributors both
/// run Sun..Saturn with the lagna eighth.
const BENEFIC_OFFSETS: [[&[u8]; 8]; 8] = [
    // Sun
    [
        &[1, 2, 4, 7, 8, 9, 10, 11],    // from Sun
        &[3, 6, 10, 11],                // from Moon
        &[1, 2, 4, 7, 8, 9, 10, 11],    // from Mars
        &[3, 5, 6, 9, 10, 11, 12],      // from Mercury
        &[5, 6, 9, 11],                 // from Jupiter
        &[6, 7, 12],                    // from Venus
        &[1, 2, 4, 7, 8, 9, 10, 11],    // from Saturn
        &[3, 4, 6, 10, 11, 12],         // from Lagna
    ],
    // Moon
    [
        &[3, 6, 7, 8, 10, 11],
        &[1, 3, 6, 7, 10, 11],
        &[2, 3, 5, 6, 9, 10, 11],
        &[1, 3, 4, 5, 7, 8, 10, 11],
        &[1, 4, 7, 8, 10, 11, 12],
        &[3, 4, 5, 7, 9, 10, 11],
        &[3, 5, 6, 11],
        &[3, 6, 10, 11],
    ],
    // Mars
    [
        &[3, 5, 6, 10, 11],
        &[3, 6, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 5, 6, 11],
        &[6, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 4, 7, 8, 9, 10, 11],
        &[1, 3, 6, 10, 11],
    ],
    // Mercury
    [
        &[5, 6, 9, 11, 12],
        &[2, 4, 6, 8, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 3, 5, 6, 9, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 2, 4, 6, 8, 10, 11],
    ],
    // Jupiter
    [
        &[1, 2, 3, 4, 7, 8, 9, 10, 11],
        &[2, 5, 7, 9, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[1, 2, 4, 5, 6, 9, 10, 11],
        &[1, 2, 3, 4, 7, 8, 10, 11],
        &[2, 5, 6, 9, 10, 11],
        &[3, 5, 6, 12],
        &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    ],
    // Venus
    [
        &[8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        &[3, 4, 6, 9, 11, 12],
        &[3, 5, 6, 9, 11],
        &[5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 10, 11],
        &[3, 4, 5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 11],
    ],
    // Saturn
    [
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 6, 11],
        &[3, 5, 6, 10, 11, 12],
        &[6, 8, 9, 10, 11, 12],
        &[5, 6, 11, 12],
        &[6, 11, 12],
        &[3, 5, 6, 11],
        &[1, 3, 4, 6, 10, 11],
    ],
    // Lagna
    [
        &[3, 4, 6, 10, 11, 12],
        &[3, 6, 10, 11, 12],
        &[1, 3, 6, 10, 11],
        &[1, 2, 4, 6, 8, 10, 11],
        &[1, 2, 4, 5, 6, 7, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9],
        &[1, 3, 4, 6, 10, 11],
        &[3, 6, 10, 11],
    ],
];

/// Expected BAV totals per target (Sun..Saturn, Lagna).
pub const BAV_TOTALS: [u8; 8] = [48, 49, 39, 54, 56, 52, 39, 49];

/// Expected SAV total over the seven grahas (constant for all charts).
pub const SAV_TOTAL: u16 = 337;

// ---------------------------------------------------------------------------
// Bhinna ashtakavarga
// ---------------------------------------------------------------------------

/// Bindu vector of a single target (graha or lagna).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BhinnaAshtakavarga {
    /// Target index: 0=Sun..6=Saturn, 7=Lagna.
    pub target_index: u8,
    /// Benefic points per rashi (0-based sign index, 0..=8 each).
    pub points: [u8; 12],
}

impl BhinnaAshtakavarga {
    /// Total points across all 12 rashis.
    pub fn total(&self) -> u8 {
        self.points.iter().sum()
    }
}

/// Calculate the bindu vector for one target by walking each
/// contributor's benefic offsets outward from its seat.
///
/// `graha_rashis` holds the 0-based rashi index of Sun..Saturn;
/// `lagna_rashi` that of the ascendant.
pub fn calculate_bav(
    target_index: u8,
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
) -> BhinnaAshtakavarga {
    let mut points = [0u8; 12];
    for (contributor, offsets) in BENEFIC_OFFSETS[target_index as usize].iter().enumerate() {
        let seat = if contributor < 7 {
            graha_rashis[contributor]
        } else {
            lagna_rashi
        };
        for &offset in *offsets {
            let credited = (u16::from(seat) + u16::from(offset) - 1) % 12;
            points[credited as usize] += 1;
        }
    }
    BhinnaAshtakavarga {
        target_index,
        points,
    }
}

/// BAV for the seven grahas.
pub fn calculate_all_bav(graha_rashis: &[u8; 7], lagna_rashi: u8) -> [BhinnaAshtakavarga; 7] {
    core::array::from_fn(|i| calculate_bav(i as u8, graha_rashis, lagna_rashi))
}

/// BAV for the lagna.
pub fn calculate_lagna_bav(graha_rashis: &[u8; 7], lagna_rashi: u8) -> BhinnaAshtakavarga {
    calculate_bav(7, graha_rashis, lagna_rashi)
}

// ---------------------------------------------------------------------------
// Sarvashtakavarga and the reductions
// ---------------------------------------------------------------------------

/// Sarvashtakavarga: combined graha points + reductions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SarvaAshtakavarga {
    /// SAV total per rashi (sum of the 7 graha BAVs).
    pub total_points: [u8; 12],
    /// After trikona sodhana (element-triangle reduction).
    pub after_trikona: [u8; 12],
    /// After ekadhipatya sodhana (dual-lordship reduction).
    pub after_ekadhipatya: [u8; 12],
}

/// Trikona sodhana: each element triangle (the signs congruent mod 4)
/// gives up its minimum.
pub fn trikona_sodhana(totals: &[u8; 12]) -> [u8; 12] {
    let mut reduced = *totals;
    for element in 0..4 {
        let floor = (0..3)
            .map(|k| totals[element + 4 * k])
            .min()
            .unwrap_or(0);
        for k in 0..3 {
            reduced[element + 4 * k] -= floor;
        }
    }
    reduced
}

/// Ekadhipatya sodhana: the two signs of every dual-lordship graha give
/// up their pair minimum. The pairs are read off the lordship table, so
/// the luminaries' single signs are untouched.
pub fn ekadhipatya_sodhana(after_trikona: &[u8; 12]) -> [u8; 12] {
    let mut reduced = *after_trikona;
    for graha in SAPTA_GRAHAS {
        let ruled: Vec<usize> = (0..12usize)
            .filter(|&s| rashi_lord_by_index(s as u8) == Some(graha))
            .collect();
        if let [a, b] = ruled[..] {
            let floor = reduced[a].min(reduced[b]);
            reduced[a] -= floor;
            reduced[b] -= floor;
        }
    }
    reduced
}

/// Calculate SAV from the 7 graha BAVs.
pub fn calculate_sav(bavs: &[BhinnaAshtakavarga; 7]) -> SarvaAshtakavarga {
    let mut total_points = [0u8; 12];
    for bav in bavs {
        for (slot, &p) in total_points.iter_mut().zip(&bav.points) {
            *slot += p;
        }
    }
    let after_trikona = trikona_sodhana(&total_points);
    let after_ekadhipatya = ekadhipatya_sodhana(&after_trikona);
    SarvaAshtakavarga {
        total_points,
        after_trikona,
        after_ekadhipatya,
    }
}

/// Complete ashtakavarga result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AshtakavargaResult {
    pub bavs: [BhinnaAshtakavarga; 7],
    pub lagna_bav: BhinnaAshtakavarga,
    pub sav: SarvaAshtakavarga,
}

/// Calculate complete ashtakavarga for given rashi positions.
pub fn calculate_ashtakavarga(graha_rashis: &[u8; 7], lagna_rashi: u8) -> AshtakavargaResult {
    let bavs = calculate_all_bav(graha_rashis, lagna_rashi);
    let lagna_bav = calculate_lagna_bav(graha_rashis, lagna_rashi);
    let sav = calculate_sav(&bavs);
    AshtakavargaResult {
        bavs,
        lagna_bav,
        sav,
    }
}

// ---------------------------------------------------------------------------
// Transit bindu strength
// ---------------------------------------------------------------------------

/// Strength bucket of a transit judged by ashtakavarga bindus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinduStrength {
    Excellent,
    Good,
    Neutral,
    Challenging,
    Difficult,
}

impl BinduStrength {
    /// Bucket a per-graha (BAV) bindu count: >=6 / >=4 / >=2 / >=1 / 0.
    pub fn from_bav(bindus: u8) -> Self {
        match bindus {
            6.. => Self::Excellent,
            4..=5 => Self::Good,
            2..=3 => Self::Neutral,
            1 => Self::Challenging,
            0 => Self::Difficult,
        }
    }

    /// Bucket a SAV bindu count: >=30 / >=25 / >=20 / >=15 / below.
    pub fn from_sav(bindus: u8) -> Self {
        match bindus {
            30.. => Self::Excellent,
            25..=29 => Self::Good,
            20..=24 => Self::Neutral,
            15..=19 => Self::Challenging,
            _ => Self::Difficult,
        }
    }
}
