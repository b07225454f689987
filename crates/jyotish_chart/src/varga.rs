//! Varga chart projection: a chart whose bodies, cusps and angles have all
//! been mapped through one divisional scheme.

use serde::{Deserialize, Serialize};

use jyotish_base::{Graha, Rashi, Varga, rashi_from_longitude, varga_longitude};
use jyotish_math::sign_index_of;

use crate::chart::Chart;

/// One projected body position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPosition {
    pub graha: Graha,
    pub longitude: f64,
    pub rashi: Rashi,
    pub sign_longitude: f64,
}

/// A divisional chart derived from a base chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VargaChart {
    pub varga: Varga,
    pub bodies: [VargaPosition; 9],
    /// Projected cusp longitudes, house 1 first.
    pub cusps: [f64; 12],
    /// Projected angle longitudes (Asc, MC, Desc, IC).
    pub angles: [f64; 4],
}

impl VargaChart {
    /// Project a base chart through a scheme. Pure and deterministic.
    pub fn project(chart: &Chart, varga: Varga) -> Self {
        let bodies = core::array::from_fn(|i| {
            let base = &chart.bodies[i];
            let lon = varga_longitude(varga, base.longitude);
            let info = rashi_from_longitude(lon);
            VargaPosition {
                graha: base.graha,
                longitude: lon,
                rashi: info.rashi,
                sign_longitude: info.degrees_in_rashi,
            }
        });
        Self {
            varga,
            bodies,
            cusps: core::array::from_fn(|i| varga_longitude(varga, chart.houses[i].longitude)),
            angles: core::array::from_fn(|i| varga_longitude(varga, chart.angles[i].longitude)),
        }
    }

    pub fn body(&self, graha: Graha) -> &VargaPosition {
        &self.bodies[graha.index() as usize]
    }

    /// Sign index of a projected body.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        self.body(graha).rashi.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::SHODASHAVARGA;
    use crate::testutil::seed_chart;

    #[test]
    fn d1_projection_is_identity() {
        let chart = seed_chart();
        let d1 = VargaChart::project(&chart, Varga::D1);
        for (base, proj) in chart.bodies.iter().zip(&d1.bodies) {
            assert!((base.longitude - proj.longitude).abs() < 1e-9);
            assert_eq!(base.rashi, proj.rashi);
        }
    }

    #[test]
    fn all_projections_stay_in_range() {
        let chart = seed_chart();
        for v in SHODASHAVARGA {
            let proj = VargaChart::project(&chart, v);
            for b in &proj.bodies {
                assert!((0.0..360.0).contains(&b.longitude), "{:?}", v);
                assert_eq!(b.rashi.index(), sign_index_of(b.longitude));
            }
            for &c in &proj.cusps {
                assert!((0.0..360.0).contains(&c));
            }
        }
    }

    #[test]
    fn navamsha_moon_matches_direct_map() {
        let chart = seed_chart();
        let d9 = VargaChart::project(&chart, Varga::D9);
        let direct = varga_longitude(Varga::D9, chart.body(Graha::Chandra).longitude);
        assert!((d9.body(Graha::Chandra).longitude - direct).abs() < 1e-12);
    }

    #[test]
    fn angles_map_through_same_function() {
        let chart = seed_chart();
        let d10 = VargaChart::project(&chart, Varga::D10);
        let direct = varga_longitude(Varga::D10, chart.angles[0].longitude);
        assert!((d10.angles[0] - direct).abs() < 1e-12);
    }
}
