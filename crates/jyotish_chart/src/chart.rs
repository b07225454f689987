//! Chart assembly: sidereal body positions, house cusps, and angles.
//!
//! A chart is built once from (input, ephemeris) and is immutable to
//! consumers. Tropical states from the provider are shifted by the
//! selected ayanamsha and normalised; sign and sign-longitude are derived
//! on assignment so the body invariants hold by construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jyotish_base::{ALL_GRAHAS, Graha, Nakshatra, NakshatraInfo, Rashi, Varga, nakshatra_from_longitude, rashi_from_longitude, varga_longitude};
use jyotish_ephem::{Ephemeris, GeoLocation};
use jyotish_math::{normalize_360, sign_index_of, sign_longitude};

use crate::error::ChartError;
use crate::input::ChartInput;

/// Sidereal position of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Longitude speed, degrees per day.
    pub speed_longitude: f64,
    /// Latitude speed, degrees per day.
    pub speed_latitude: f64,
    pub rashi: Rashi,
    /// Degrees within the rashi, [0, 30).
    pub sign_longitude: f64,
    pub retrograde: bool,
}

impl BodyPosition {
    /// Build a position from a sidereal longitude, deriving sign fields.
    fn from_sidereal(
        graha: Graha,
        longitude: f64,
        latitude: f64,
        speed_longitude: f64,
        speed_latitude: f64,
        retrograde: bool,
    ) -> Result<Self, ChartError> {
        // Nodes are conventionally retrograde; for everything else the
        // flag must agree with the speed sign.
        let is_node = matches!(graha, Graha::Rahu | Graha::Ketu);
        if !is_node && retrograde != (speed_longitude < 0.0) {
            return Err(ChartError::BadInput("retrograde flag disagrees with speed"));
        }
        let lon = normalize_360(longitude);
        let info = rashi_from_longitude(lon);
        Ok(Self {
            graha,
            longitude: lon,
            latitude,
            speed_longitude,
            speed_latitude,
            rashi: info.rashi,
            sign_longitude: info.degrees_in_rashi,
            retrograde,
        })
    }

    /// Nakshatra classification of this position.
    pub fn nakshatra(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.longitude)
    }
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House index, 1..12.
    pub index: u8,
    /// Sidereal cusp longitude, [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// Arc to the next cusp, degrees; the twelve sizes sum to 360.
    pub size: f64,
}

/// Chart angle identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleId {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

/// One chart angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub id: AngleId,
    pub longitude: f64,
    pub rashi: Rashi,
}

/// An assembled sidereal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub input: ChartInput,
    /// JD (UT) of the chart instant.
    pub jd_ut: f64,
    /// Ayanamsha value applied, degrees.
    pub ayanamsha_deg: f64,
    /// Bodies indexed by `Graha::index()`.
    pub bodies: [BodyPosition; 9],
    /// Houses indexed by house number - 1.
    pub houses: [HouseCusp; 12],
    /// Angles: Ascendant, Midheaven, Descendant, Imum Coeli.
    pub angles: [Angle; 4],
}

impl Chart {
    /// Assemble a chart from an input and an ephemeris provider.
    pub fn assemble<E: Ephemeris>(ephemeris: &E, input: ChartInput) -> Result<Self, ChartError> {
        let jd_ut = input.datetime.to_jd_utc()?;
        let aya = ephemeris.ayanamsha(jd_ut, input.ayanamsha)?;
        debug!(jd_ut, ayanamsha = aya, "assembling chart");

        let mut bodies = Vec::with_capacity(9);
        for graha in ALL_GRAHAS {
            let state = ephemeris.body_state(graha, jd_ut)?;
            bodies.push(BodyPosition::from_sidereal(
                graha,
                state.longitude - aya,
                state.latitude,
                state.speed_longitude,
                state.speed_latitude,
                state.retrograde,
            )?);
        }
        let bodies: [BodyPosition; 9] = bodies
            .try_into()
            .map_err(|_| ChartError::BadInput("body list"))?;

        let raw = ephemeris.houses(jd_ut, &input.geo, input.house_system, input.ayanamsha)?;
        let mut houses = [HouseCusp {
            index: 0,
            longitude: 0.0,
            rashi: Rashi::Mesha,
            size: 0.0,
        }; 12];
        for i in 0..12 {
            let lon = normalize_360(raw.cusps[i]);
            let next = normalize_360(raw.cusps[(i + 1) % 12]);
            let size = normalize_360(next - lon);
            houses[i] = HouseCusp {
                index: (i + 1) as u8,
                longitude: lon,
                rashi: rashi_from_longitude(lon).rashi,
                size,
            };
        }

        let angle_ids = [
            AngleId::Ascendant,
            AngleId::Midheaven,
            AngleId::Descendant,
            AngleId::ImumCoeli,
        ];
        let angles = core::array::from_fn(|i| {
            let lon = normalize_360(raw.angles[i]);
            Angle {
                id: angle_ids[i],
                longitude: lon,
                rashi: rashi_from_longitude(lon).rashi,
            }
        });

        Ok(Self {
            input,
            jd_ut,
            ayanamsha_deg: aya,
            bodies,
            houses,
            angles,
        })
    }

    /// Body position by graha.
    pub fn body(&self, graha: Graha) -> &BodyPosition {
        &self.bodies[graha.index() as usize]
    }

    /// House cusp by 1-based index. None if out of range.
    pub fn house(&self, index: u8) -> Option<&HouseCusp> {
        if (1..=12).contains(&index) {
            Some(&self.houses[(index - 1) as usize])
        } else {
            None
        }
    }

    /// Angle by id.
    pub fn angle(&self, id: AngleId) -> &Angle {
        let idx = match id {
            AngleId::Ascendant => 0,
            AngleId::Midheaven => 1,
            AngleId::Descendant => 2,
            AngleId::ImumCoeli => 3,
        };
        &self.angles[idx]
    }

    /// Ascendant sign index, the whole-sign lagna.
    pub fn lagna_rashi_index(&self) -> u8 {
        sign_index_of(self.angle(AngleId::Ascendant).longitude)
    }

    /// House (1..12) containing a longitude, by cusp intervals.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let lon = normalize_360(longitude);
        for h in &self.houses {
            let start = h.longitude;
            let width = h.size;
            if normalize_360(lon - start) < width {
                return h.index;
            }
        }
        12
    }

    /// Whole-sign house of a body counted from the lagna sign.
    pub fn whole_sign_house(&self, graha: Graha) -> u8 {
        let body_sign = i16::from(self.body(graha).rashi.index());
        let lagna_sign = i16::from(self.lagna_rashi_index());
        ((body_sign - lagna_sign).rem_euclid(12) + 1) as u8
    }

    /// Sidereal longitude of a body mapped through a varga scheme.
    pub fn varga_longitude_of(&self, graha: Graha, varga: Varga) -> f64 {
        varga_longitude(varga, self.body(graha).longitude)
    }

    /// Moon nakshatra (the janma nakshatra of this chart).
    pub fn janma_nakshatra(&self) -> Nakshatra {
        self.body(Graha::Chandra).nakshatra().nakshatra
    }

    /// Geographic position of the chart.
    pub fn geo(&self) -> &GeoLocation {
        &self.input.geo
    }
}

/// Verify the spec invariants hold for an assembled chart (test support).
#[doc(hidden)]
pub fn check_chart_invariants(chart: &Chart) -> bool {
    let sizes: f64 = chart.houses.iter().map(|h| h.size).sum();
    if (sizes - 360.0).abs() > 1e-6 {
        return false;
    }
    chart.bodies.iter().all(|b| {
        (0.0..360.0).contains(&b.longitude)
            && b.rashi.index() == sign_index_of(b.longitude)
            && (b.sign_longitude - sign_longitude(b.longitude)).abs() < 1e-9
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{seed_chart, seed_ephemeris, seed_input};

    #[test]
    fn assembles_seed_chart() {
        let chart = seed_chart();
        assert!(check_chart_invariants(&chart));
    }

    #[test]
    fn seed_moon_is_simha_purva_phalguni() {
        let chart = seed_chart();
        let moon = chart.body(Graha::Chandra);
        assert_eq!(moon.rashi, Rashi::Simha);
        let nak = moon.nakshatra();
        assert_eq!(nak.nakshatra, Nakshatra::PurvaPhalguni);
        assert_eq!(nak.pada, 2);
    }

    #[test]
    fn seed_sun_is_meena() {
        let chart = seed_chart();
        assert_eq!(chart.body(Graha::Surya).rashi, Rashi::Meena);
    }

    #[test]
    fn house_sizes_sum_to_circle() {
        let chart = seed_chart();
        let total: f64 = chart.houses.iter().map(|h| h.size).sum();
        assert!((total - 360.0).abs() < 1e-6);
    }

    #[test]
    fn house_lookup_by_interval() {
        let chart = seed_chart();
        for h in &chart.houses {
            let probe = normalize_360(h.longitude + h.size / 2.0);
            assert_eq!(chart.house_of(probe), h.index, "house {}", h.index);
        }
    }

    #[test]
    fn nodes_are_retrograde() {
        let chart = seed_chart();
        assert!(chart.body(Graha::Rahu).retrograde);
        assert!(chart.body(Graha::Ketu).retrograde);
    }

    #[test]
    fn retrograde_mismatch_is_rejected() {
        let mut snapshot = seed_ephemeris().snapshot().clone();
        if let Some(state) = snapshot.bodies.get_mut(&Graha::Shani) {
            state.retrograde = !state.retrograde;
        }
        let eph = jyotish_ephem::StaticEphemeris::new(snapshot);
        let err = Chart::assemble(&eph, seed_input()).unwrap_err();
        assert_eq!(
            err,
            ChartError::BadInput("retrograde flag disagrees with speed")
        );
    }

    #[test]
    fn whole_sign_house_of_moon() {
        let chart = seed_chart();
        // Lagna is Tula (whole-sign); Moon in Simha → 11th
        let lagna = chart.lagna_rashi_index();
        let moon_sign = chart.body(Graha::Chandra).rashi.index();
        let expected = ((i16::from(moon_sign) - i16::from(lagna)).rem_euclid(12) + 1) as u8;
        assert_eq!(chart.whole_sign_house(Graha::Chandra), expected);
    }

    #[test]
    fn body_accessors_cover_all_grahas() {
        let chart = seed_chart();
        for g in ALL_GRAHAS {
            assert_eq!(chart.body(g).graha, g);
        }
        assert!(chart.house(0).is_none());
        assert!(chart.house(13).is_none());
        assert_eq!(chart.house(1).map(|h| h.index), Some(1));
    }
}
