//! Recorded ephemeris fixture for the 2025-04-09 20:51 +05:30 Bengaluru
//! reference moment, used across the crate's tests.
//!
//! The snapshot values are rounded recordings of that evening: Moon in
//! Simha (Purva Phalguni pada 2), Sun in Meena, Tula rising, Venus and the
//! nodes retrograde.

use std::collections::BTreeMap;

use jyotish_base::Graha;
use jyotish_ephem::{
    Ayanamsha, BodyState, EphemSnapshot, GeoLocation, HouseSystem, RawHouses, SnapshotHouses,
    StaticEphemeris,
};

use crate::chart::Chart;
use crate::input::{ChartInput, CivilDateTime};

/// Lahiri ayanamsha at the fixture epoch.
pub const FIXTURE_LAHIRI: f64 = 24.2123;

/// Krishnamurti ayanamsha at the fixture epoch.
pub const FIXTURE_KRISHNAMURTI: f64 = 24.1288;

/// JD (UT) of 2025-04-09 15:21 UT.
pub const FIXTURE_JD: f64 = 2_460_775.139_583_333;

fn body(lon: f64, lat: f64, speed: f64, retro: bool) -> BodyState {
    BodyState {
        longitude: lon,
        latitude: lat,
        speed_longitude: speed,
        speed_latitude: 0.0,
        retrograde: retro,
    }
}

/// The recorded snapshot around the fixture epoch.
pub fn seed_snapshot() -> EphemSnapshot {
    let mut bodies = BTreeMap::new();
    // Tropical longitudes; sidereal = tropical - ayanamsha.
    bodies.insert(Graha::Surya, body(20.0123, 0.0002, 0.9833, false));
    bodies.insert(Graha::Chandra, body(163.0621, 3.1, 13.47, false));
    bodies.insert(Graha::Mangal, body(116.21, 1.9, 0.55, false));
    bodies.insert(Graha::Buddh, body(1.21, -1.2, 0.31, false));
    bodies.insert(Graha::Guru, body(75.2, -0.8, 0.21, false));
    bodies.insert(Graha::Shukra, body(0.21, 1.5, -0.11, true));
    bodies.insert(Graha::Shani, body(355.21, -1.9, 0.12, false));
    bodies.insert(Graha::Rahu, body(20.21, 0.0, -0.0529, true));
    bodies.insert(Graha::Ketu, body(200.21, 0.0, -0.0529, true));

    let mut ayanamshas = BTreeMap::new();
    ayanamshas.insert(Ayanamsha::Lahiri, FIXTURE_LAHIRI);
    ayanamshas.insert(Ayanamsha::Krishnamurti, FIXTURE_KRISHNAMURTI);

    // Bengaluru rise/set instants (UT JD) around the epoch.
    let sunrise_apr9 = 2_460_774.525_7;
    let sunset_apr9 = 2_460_775.043_8;
    let sunrise_apr10 = 2_460_775.525_4;
    let sunset_apr10 = 2_460_776.044_0;

    // Whole-sign cusps from the Tula lagna.
    let whole_sign_cusps: [f64; 12] = core::array::from_fn(|i| (180.0 + i as f64 * 30.0) % 360.0);
    // Placidus cusps for the same moment (unequal houses).
    let placidus_cusps = [
        195.2, 224.0, 254.5, 285.9, 316.8, 346.6, 15.2, 44.0, 74.5, 105.9, 136.8, 166.6,
    ];
    let angles = [195.2, 105.9, 15.2, 285.9];

    EphemSnapshot {
        epoch_jd: FIXTURE_JD,
        coverage: (FIXTURE_JD - 3.0, FIXTURE_JD + 3.0),
        bodies,
        ayanamshas,
        sunrises: vec![sunrise_apr9 - 1.0, sunrise_apr9, sunrise_apr10, sunrise_apr10 + 1.0],
        sunsets: vec![sunset_apr9 - 1.0, sunset_apr9, sunset_apr10, sunset_apr10 + 1.0],
        houses: vec![
            SnapshotHouses {
                system: HouseSystem::WholeSign,
                houses: RawHouses {
                    cusps: whole_sign_cusps,
                    angles,
                },
            },
            SnapshotHouses {
                system: HouseSystem::Placidus,
                houses: RawHouses {
                    cusps: placidus_cusps,
                    angles,
                },
            },
        ],
        solar_eclipses: vec![],
        lunar_eclipses: vec![],
        stations: BTreeMap::new(),
    }
}

/// Snapshot-backed ephemeris for the fixture.
pub fn seed_ephemeris() -> StaticEphemeris {
    StaticEphemeris::new(seed_snapshot())
}

/// Fixture civil time: 2025-04-09 20:51 at +05:30.
pub fn seed_civil() -> CivilDateTime {
    CivilDateTime {
        year: 2025,
        month: 4,
        day: 9,
        hour: 20,
        minute: 51,
        second: 0.0,
        utc_offset_min: 330,
    }
}

/// Fixture location: Bengaluru.
pub fn seed_geo() -> GeoLocation {
    GeoLocation::new(12.9716, 77.5946, 920.0).expect("fixture location is valid")
}

/// Vedic-default input (Lahiri, whole-sign).
pub fn seed_input() -> ChartInput {
    ChartInput::vedic(seed_civil(), seed_geo())
}

/// KP-default input (Krishnamurti, Placidus).
pub fn seed_kp_input() -> ChartInput {
    ChartInput::kp(seed_civil(), seed_geo())
}

/// Assembled Vedic chart for the fixture.
pub fn seed_chart() -> Chart {
    Chart::assemble(&seed_ephemeris(), seed_input()).expect("fixture chart assembles")
}

/// Assembled KP chart for the fixture.
pub fn seed_kp_chart() -> Chart {
    Chart::assemble(&seed_ephemeris(), seed_kp_input()).expect("fixture chart assembles")
}
