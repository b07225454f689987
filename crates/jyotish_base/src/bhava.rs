//! Bhava bala (house strength).
//!
//! Four sub-components per house: bhavadhipati (the lord's total
//! shadbala), bhava dig (arc distance from the cusp to its direction
//! point), bhava drishti (whole-house Vedic aspects to the cusp, signed by
//! benefic/malefic nature), and bhava sthana (fixed positional tier).

use serde::{Deserialize, Serialize};

use jyotish_math::distance;

use crate::drishti::aspects_point;
use crate::graha::{ALL_GRAHAS, Graha, GrahaNature};

/// Direction-point house (1, 4, 7 or 10) for each house.
///
/// East houses 1/5/9 anchor to the 1st cusp, north houses 4/8/12 to the
/// 4th, west houses 7/11/3 to the 7th, south houses 10/2/6 to the 10th.
pub const fn direction_house(house_num: u8) -> u8 {
    match house_num {
        1 | 5 | 9 => 1,
        4 | 8 | 12 => 4,
        3 | 7 | 11 => 7,
        _ => 10, // 2, 6, 10
    }
}

/// Bhava dig bala: 60 at the direction point falling linearly to 0 at 180
/// degrees of separation.
pub fn bhava_dig_bala(cusp_lon: f64, direction_cusp_lon: f64) -> f64 {
    (60.0 * (1.0 - distance(cusp_lon, direction_cusp_lon) / 180.0)).max(0.0)
}

/// Signed aspect strength of one graha onto a house cusp: ±10 when the
/// whole-house Vedic aspect applies, positive from benefics.
pub fn bhava_aspect(graha: Graha, graha_lon: f64, cusp_lon: f64) -> f64 {
    if !aspects_point(graha, graha_lon, cusp_lon) {
        return 0.0;
    }
    match graha.natural_nature() {
        GrahaNature::Benefic => 10.0,
        GrahaNature::Malefic => -10.0,
    }
}

/// Bhava drishti bala: net signed aspects from all nine grahas onto the
/// cusp, clamped at zero.
pub fn bhava_drishti_bala(cusp_lon: f64, graha_lons: &[f64; 9]) -> f64 {
    let net: f64 = ALL_GRAHAS
        .iter()
        .map(|&g| bhava_aspect(g, graha_lons[g.index() as usize], cusp_lon))
        .sum();
    net.max(0.0)
}

/// Bhava sthana bala: trikona 60, kendra 45, upachaya 30, third house 15,
/// dusthana 0.
pub fn bhava_sthana_bala(house_num: u8) -> f64 {
    match house_num {
        1 | 5 | 9 => 60.0,
        4 | 7 | 10 => 45.0,
        2 | 11 => 30.0,
        3 => 15.0,
        _ => 0.0, // 6, 8, 12
    }
}

/// Bhava bala record for one house.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BhavaBala {
    pub house: u8,
    /// The house lord's total shadbala in virupas.
    pub bhavadhipati: f64,
    pub dig: f64,
    pub drishti: f64,
    pub sthana: f64,
    pub total: f64,
}

/// Compute the bhava bala of one house.
///
/// `lord_shadbala_virupas` is the total shadbala of the house's sign lord;
/// `cusp_lons` the twelve cusp longitudes; `graha_lons` all nine grahas.
pub fn bhava_bala(
    house_num: u8,
    lord_shadbala_virupas: f64,
    cusp_lons: &[f64; 12],
    graha_lons: &[f64; 9],
) -> BhavaBala {
    let cusp = cusp_lons[(house_num - 1) as usize];
    let dir_cusp = cusp_lons[(direction_house(house_num) - 1) as usize];
    let dig = bhava_dig_bala(cusp, dir_cusp);
    let drishti = bhava_drishti_bala(cusp, graha_lons);
    let sthana = bhava_sthana_bala(house_num);
    BhavaBala {
        house: house_num,
        bhavadhipati: lord_shadbala_virupas,
        dig,
        drishti,
        sthana,
        total: lord_shadbala_virupas + dig + drishti + sthana,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_houses() {
        assert_eq!(direction_house(1), 1);
        assert_eq!(direction_house(5), 1);
        assert_eq!(direction_house(9), 1);
        assert_eq!(direction_house(4), 4);
        assert_eq!(direction_house(12), 4);
        assert_eq!(direction_house(3), 7);
        assert_eq!(direction_house(11), 7);
        assert_eq!(direction_house(2), 10);
        assert_eq!(direction_house(6), 10);
        assert_eq!(direction_house(10), 10);
    }

    #[test]
    fn dig_at_direction_point() {
        assert!((bhava_dig_bala(100.0, 100.0) - 60.0).abs() < 1e-9);
        assert!(bhava_dig_bala(100.0, 280.0).abs() < 1e-9);
        assert!((bhava_dig_bala(100.0, 190.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_signs() {
        // Jupiter opposite the cusp: +10. Saturn opposite: -10.
        assert!((bhava_aspect(Graha::Guru, 0.0, 185.0) - 10.0).abs() < 1e-9);
        assert!((bhava_aspect(Graha::Shani, 0.0, 185.0) + 10.0).abs() < 1e-9);
        // No aspect → 0
        assert!(bhava_aspect(Graha::Guru, 0.0, 35.0).abs() < 1e-9);
    }

    #[test]
    fn drishti_clamped() {
        // Only malefics aspecting → clamped to 0
        let mut lons = [500.0; 9]; // 500 normalises to 140; park everyone away
        lons[Graha::Shani.index() as usize] = 5.0;
        lons[Graha::Mangal.index() as usize] = 5.0;
        let cusp = 185.0;
        assert_eq!(bhava_drishti_bala(cusp, &lons), 0.0);
    }

    #[test]
    fn sthana_tiers() {
        assert_eq!(bhava_sthana_bala(1), 60.0);
        assert_eq!(bhava_sthana_bala(9), 60.0);
        assert_eq!(bhava_sthana_bala(7), 45.0);
        assert_eq!(bhava_sthana_bala(11), 30.0);
        assert_eq!(bhava_sthana_bala(3), 15.0);
        assert_eq!(bhava_sthana_bala(8), 0.0);
    }

    #[test]
    fn total_is_sum() {
        let cusps: [f64; 12] = core::array::from_fn(|i| i as f64 * 30.0);
        let lons = [10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0];
        let b = bhava_bala(5, 123.0, &cusps, &lons);
        assert!((b.total - (b.bhavadhipati + b.dig + b.drishti + b.sthana)).abs() < 1e-9);
        assert_eq!(b.house, 5);
        assert_eq!(b.bhavadhipati, 123.0);
    }
}
