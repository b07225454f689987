//! Chart-level ashtakavarga: natal bindu vectors and transit bindu
//! lookups.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    AshtakavargaResult, BinduStrength, Graha, SAPTA_GRAHAS, calculate_ashtakavarga,
};

use crate::chart::Chart;

/// Transit bindu lookup for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitBindu {
    pub graha: Graha,
    /// 0-based sign index the graha transits.
    pub transit_rashi_index: u8,
    /// Natal BAV bindus of that graha at the transit sign.
    pub bindus: u8,
    pub strength: BinduStrength,
    /// SAV bindus at the transit sign.
    pub sarva_bindus: u8,
    pub sarva_strength: BinduStrength,
}

/// Natal ashtakavarga of a chart.
pub fn natal_ashtakavarga(chart: &Chart) -> AshtakavargaResult {
    let graha_rashis: [u8; 7] =
        core::array::from_fn(|i| chart.bodies[i].rashi.index());
    calculate_ashtakavarga(&graha_rashis, chart.lagna_rashi_index())
}

/// Transit bindus of every sapta graha in a transit chart against the
/// natal vectors.
pub fn transit_bindus(natal: &Chart, transit: &Chart) -> [TransitBindu; 7] {
    let av = natal_ashtakavarga(natal);
    core::array::from_fn(|i| {
        let graha = SAPTA_GRAHAS[i];
        let sign = transit.bodies[i].rashi.index();
        let bindus = av.bavs[i].points[sign as usize];
        let sarva = av.sav.total_points[sign as usize];
        TransitBindu {
            graha,
            transit_rashi_index: sign,
            bindus,
            strength: BinduStrength::from_bav(bindus),
            sarva_bindus: sarva,
            sarva_strength: BinduStrength::from_sav(sarva),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::ashtakavarga::BAV_TOTALS;
    use crate::testutil::seed_chart;

    #[test]
    fn natal_totals_hold_for_seed_chart() {
        let av = natal_ashtakavarga(&seed_chart());
        for (i, bav) in av.bavs.iter().enumerate() {
            assert_eq!(bav.total(), BAV_TOTALS[i]);
        }
        assert_eq!(av.lagna_bav.total(), 49);
        let sav: u16 = av.sav.total_points.iter().map(|&p| u16::from(p)).sum();
        assert_eq!(sav, 337);
    }

    #[test]
    fn self_transit_uses_natal_signs() {
        let chart = seed_chart();
        let av = natal_ashtakavarga(&chart);
        for tb in transit_bindus(&chart, &chart) {
            let gi = tb.graha.index() as usize;
            assert_eq!(tb.transit_rashi_index, chart.bodies[gi].rashi.index());
            assert_eq!(
                tb.bindus,
                av.bavs[gi].points[tb.transit_rashi_index as usize]
            );
        }
    }

    #[test]
    fn strengths_match_bindu_buckets() {
        let chart = seed_chart();
        for tb in transit_bindus(&chart, &chart) {
            assert_eq!(tb.strength, BinduStrength::from_bav(tb.bindus));
            assert_eq!(tb.sarva_strength, BinduStrength::from_sav(tb.sarva_bindus));
        }
    }
}
