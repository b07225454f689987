//! Compatibility analysis between two charts: ashtakoota scores, dosha
//! detection with cancellation, dasha-lord and navamsha overlays, and the
//! weighted aggregate score.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    Dosha, Graha, KutaScores, NaisargikaMaitri, Varga, dasha_state_at, dosha_cancelled,
    has_dosha, kuta_scores, naisargika_maitri, varga_longitude,
};
use jyotish_math::sign_index_of;

use crate::chart::Chart;

/// Compatibility level buckets over the 0-100 aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Average,
    Challenging,
    Difficult,
}

impl CompatibilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Average
        } else if score >= 20.0 {
            Self::Challenging
        } else {
            Self::Difficult
        }
    }
}

/// Presence and cancellation of one dosha across the pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoshaFinding {
    pub dosha: Dosha,
    pub in_first: bool,
    pub in_second: bool,
    pub cancelled: bool,
}

/// Complete compatibility record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub kuta: KutaScores,
    pub kuta_total: f64,
    pub doshas: Vec<DoshaFinding>,
    /// Dasha-lord overlay, 0..10.
    pub dasha_score: f64,
    /// Mahadasha lords of the two charts at their instants.
    pub dasha_lords: (Graha, Graha),
    /// Navamsha (D9 Moon) overlay, 0..10.
    pub navamsha_score: f64,
    /// Aggregate score, 0..100.
    pub score: f64,
    pub level: CompatibilityLevel,
}

/// Five-level friendship of two grahas mapped onto 0..10.
fn planet_pair_score(a: Graha, b: Graha) -> f64 {
    if a == b {
        return 10.0;
    }
    use NaisargikaMaitri as N;
    match (naisargika_maitri(a, b), naisargika_maitri(b, a)) {
        (N::Friend, N::Friend) => 10.0,
        (N::Friend, N::Neutral) | (N::Neutral, N::Friend) => 7.5,
        (N::Neutral, N::Neutral) | (N::Friend, N::Enemy) | (N::Enemy, N::Friend) => 5.0,
        (N::Neutral, N::Enemy) | (N::Enemy, N::Neutral) => 2.5,
        (N::Enemy, N::Enemy) => 0.0,
    }
}

fn graha_rashis(chart: &Chart) -> [u8; 9] {
    core::array::from_fn(|i| chart.bodies[i].rashi.index())
}

/// Analyse the compatibility of two charts (first chart = groom side in
/// the directional kutas).
pub fn compatibility(first: &Chart, second: &Chart) -> CompatibilityRecord {
    let moon1 = first.body(Graha::Chandra);
    let moon2 = second.body(Graha::Chandra);
    let nak1 = moon1.nakshatra().nakshatra_index;
    let nak2 = moon2.nakshatra().nakshatra_index;

    let kuta = kuta_scores(nak1, moon1.rashi.index(), nak2, moon2.rashi.index());
    let kuta_total = kuta.total();

    // Dosha findings with mutual/benefic cancellation
    let rashis1 = graha_rashis(first);
    let rashis2 = graha_rashis(second);
    let lagna1 = first.lagna_rashi_index();
    let lagna2 = second.lagna_rashi_index();
    let doshas: Vec<DoshaFinding> =
        [Dosha::Mangal, Dosha::Kuja, Dosha::Shani, Dosha::Grahan]
            .into_iter()
            .map(|dosha| {
                let in_first = has_dosha(dosha, &rashis1, lagna1);
                let in_second = has_dosha(dosha, &rashis2, lagna2);
                let cancelled = match dosha {
                    Dosha::Mangal | Dosha::Kuja => {
                        let (rashis, lagna) = if in_first {
                            (&rashis1, lagna1)
                        } else {
                            (&rashis2, lagna2)
                        };
                        dosha_cancelled(in_first, in_second, rashis, lagna)
                    }
                    // The Shani and Grahan doshas only cancel mutually
                    _ => in_first && in_second,
                };
                DoshaFinding {
                    dosha,
                    in_first,
                    in_second,
                    cancelled,
                }
            })
            .collect();

    // Dasha overlay: each chart's running mahadasha lord at its own instant
    let dasha1 = dasha_state_at(moon1.longitude, first.jd_ut, first.jd_ut);
    let dasha2 = dasha_state_at(moon2.longitude, second.jd_ut, second.jd_ut);
    let maha_score = planet_pair_score(dasha1.mahadasha.lord, dasha2.mahadasha.lord);
    let antar_score = planet_pair_score(dasha1.antardasha.lord, dasha2.antardasha.lord);
    let dasha_score = maha_score * 0.6 + antar_score * 0.4;

    // Navamsha overlay: friendship of the D9 Moon sign lords
    let d9_moon1 = sign_index_of(varga_longitude(Varga::D9, moon1.longitude));
    let d9_moon2 = sign_index_of(varga_longitude(Varga::D9, moon2.longitude));
    let navamsha_score = planet_pair_score(
        jyotish_base::rashi_lord_by_index(d9_moon1).unwrap_or(Graha::Surya),
        jyotish_base::rashi_lord_by_index(d9_moon2).unwrap_or(Graha::Surya),
    );

    // Dosha residual: 10 baseline, -5 when both sides carry a Mars dosha,
    // -2 when one does, +5 back when cancelled; clamped to 0..10.
    let mangal = &doshas[0];
    let kuja = &doshas[1];
    let both = (mangal.in_first && mangal.in_second) || (kuja.in_first && kuja.in_second);
    let one = mangal.in_first || mangal.in_second || kuja.in_first || kuja.in_second;
    let mut dosha_residual: f64 = 10.0;
    if both {
        dosha_residual -= 5.0;
    } else if one {
        dosha_residual -= 2.0;
    }
    if one && (mangal.cancelled || kuja.cancelled) {
        dosha_residual += 5.0;
    }
    let dosha_residual = dosha_residual.clamp(0.0, 10.0);

    let score = ((kuta_total / 36.0) * 50.0
        + dosha_residual
        + (dasha_score / 10.0) * 20.0
        + (navamsha_score / 10.0) * 20.0)
        .clamp(0.0, 100.0);

    CompatibilityRecord {
        kuta,
        kuta_total,
        doshas,
        dasha_score,
        dasha_lords: (dasha1.mahadasha.lord, dasha2.mahadasha.lord),
        navamsha_score,
        score,
        level: CompatibilityLevel::from_score(score),
    }
}
