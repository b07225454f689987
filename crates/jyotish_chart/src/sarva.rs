//! Chart-level Sarvatobhadra chakra and tara bala.
//!
//! The natal chart fixes the janma nakshatra at the centre; the current
//! (transit) chart supplies the graha placements and the Moon whose
//! nakshatra selects the running tara.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    ALL_DIRECTIONS, DirectionQuality, Graha, SarvatobhadraChakra, TaraBala, build_chakra,
    tara_bala,
};

use crate::chart::Chart;

/// Sarvatobhadra analysis of a (natal, current) chart pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarvatobhadraReport {
    pub chakra: SarvatobhadraChakra,
    pub tara: TaraBala,
    pub directions: Vec<DirectionQuality>,
    /// Blended chakra/tara score, 0..100.
    pub score: f64,
}

/// Build the chakra from the natal janma nakshatra with current
/// placements.
pub fn sarvatobhadra_report(natal: &Chart, current: &Chart) -> SarvatobhadraReport {
    let janma = natal.body(Graha::Chandra).nakshatra().nakshatra_index;
    let current_moon = current.body(Graha::Chandra).nakshatra().nakshatra_index;

    let naks: [u8; 9] =
        core::array::from_fn(|i| current.bodies[i].nakshatra().nakshatra_index);
    let chakra = build_chakra(janma, &naks);
    let tara = tara_bala(janma, current_moon);

    let directions = ALL_DIRECTIONS
        .iter()
        .map(|&d| chakra.direction_quality(d))
        .collect();
    let score = chakra.chakra_score(tara.current_tara);

    SarvatobhadraReport {
        chakra,
        tara,
        directions,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::Tara;
    use crate::testutil::seed_chart;

    #[test]
    fn natal_report_centres_on_janma() {
        let chart = seed_chart();
        let report = sarvatobhadra_report(&chart, &chart);
        let janma = chart.body(Graha::Chandra).nakshatra().nakshatra_index;
        assert_eq!(report.chakra.janma_nakshatra_index, janma);
        assert_eq!(report.chakra.cell(4, 4), Some(janma));
    }

    #[test]
    fn natal_tara_is_janma() {
        let chart = seed_chart();
        let report = sarvatobhadra_report(&chart, &chart);
        assert_eq!(report.tara.current_tara, Tara::Janma);
    }

    #[test]
    fn nine_directions_reported() {
        let chart = seed_chart();
        let report = sarvatobhadra_report(&chart, &chart);
        assert_eq!(report.directions.len(), 9);
        assert!((0.0..=100.0).contains(&report.score));
    }
}
