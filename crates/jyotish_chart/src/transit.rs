//! Gochara transit records: natal versus transit positions judged from
//! the natal Moon, with vedha and argala overlays, ashtakavarga bindus,
//! and the combined strength rollup.

use serde::Serialize;

use jyotish_base::{
    ALL_GRAHAS, GocharaEffect, GocharaStrength, Graha,
    gochara::{
        argala_houses, effect_from_moon, gochara_strength, house_from_moon, reading_from_moon,
        vedha_house,
    },
};

use crate::ashta::{TransitBindu, transit_bindus};
use crate::chart::Chart;

/// Gochara record of one transiting graha.
#[derive(Debug, Clone, Serialize)]
pub struct GocharaRecord {
    pub graha: Graha,
    /// Natal sidereal longitude.
    pub natal_longitude: f64,
    /// Transit sidereal longitude.
    pub transit_longitude: f64,
    /// House occupied in the natal chart (by cusp intervals).
    pub natal_house: u8,
    /// House counted from the natal Moon's sign.
    pub house_from_moon: u8,
    pub effect: GocharaEffect,
    /// Traditional reading of the base effect.
    pub reading: &'static str,
    /// Transiting grahas in the vedha house (each nullifies the effect).
    pub vedha_grahas: Vec<Graha>,
    /// Transiting grahas in the argala houses (each intensifies it).
    pub argala_grahas: Vec<Graha>,
    /// Ashtakavarga bindus at the transit sign (sapta grahas only).
    pub bindus: Option<TransitBindu>,
    pub score: f64,
    pub strength: GocharaStrength,
}

/// Full gochara analysis of a transit chart against a natal chart.
pub fn gochara_records(natal: &Chart, transit: &Chart) -> Vec<GocharaRecord> {
    let natal_moon_sign = natal.body(Graha::Chandra).rashi.index();
    let bindus = transit_bindus(natal, transit);

    // House of every transiting graha in the natal frame, reused for the
    // vedha and argala occupancy scans.
    let transit_houses: [u8; 9] =
        core::array::from_fn(|i| natal.house_of(transit.bodies[i].longitude));

    ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let gi = graha.index() as usize;
            let house = transit_houses[gi];
            let from_moon = house_from_moon(natal_moon_sign, transit.bodies[gi].rashi.index());
            let effect = effect_from_moon(graha, from_moon);

            let vedha = vedha_house(house);
            let vedha_grahas: Vec<Graha> = ALL_GRAHAS
                .iter()
                .copied()
                .filter(|&o| o != graha && transit_houses[o.index() as usize] == vedha)
                .collect();

            let argala = argala_houses(house);
            let argala_grahas: Vec<Graha> = ALL_GRAHAS
                .iter()
                .copied()
                .filter(|&o| o != graha && argala.contains(&transit_houses[o.index() as usize]))
                .collect();

            let (score, strength) = gochara_strength(
                effect,
                vedha_grahas.len() as u8,
                argala_grahas.len() as u8,
            );

            GocharaRecord {
                graha,
                natal_longitude: natal.bodies[gi].longitude,
                transit_longitude: transit.bodies[gi].longitude,
                natal_house: house,
                house_from_moon: from_moon,
                effect,
                reading: reading_from_moon(graha, from_moon),
                vedha_grahas,
                argala_grahas,
                bindus: if graha.is_sapta() {
                    Some(bindus[gi])
                } else {
                    None
                },
                score,
                strength,
            }
        })
        .collect()
}
