//! Snapshot-backed ephemeris provider.
//!
//! An [`EphemSnapshot`] records, for a window around one epoch, the
//! tropical body states, ayanamsha values, rise/set instants, house cusps,
//! and optionally eclipse and station instants. [`StaticEphemeris`] serves
//! the snapshot through the [`Ephemeris`] port: body states are propagated
//! linearly by their recorded speeds inside the coverage window, anything
//! outside is an `EphemerisRange` failure, and anything the snapshot never
//! recorded surfaces as `Unreachable`/`MissingData` rather than a default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use jyotish_base::Graha;
use jyotish_math::normalize_360;

use crate::{
    Ayanamsha, BodyState, Ephemeris, EphemError, GeoLocation, HouseSystem, RawHouses,
};

/// House cusps recorded for one house system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotHouses {
    pub system: HouseSystem,
    pub houses: RawHouses,
}

/// A recorded ephemeris window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemSnapshot {
    /// Epoch the body states are anchored at, JD (UT).
    pub epoch_jd: f64,
    /// Coverage window [start, end] in JD (UT).
    pub coverage: (f64, f64),
    /// Tropical body states at the epoch, keyed by graha name.
    pub bodies: BTreeMap<Graha, BodyState>,
    /// Ayanamsha degrees at the epoch per scheme.
    pub ayanamshas: BTreeMap<Ayanamsha, f64>,
    /// Sunrise instants inside the coverage window, ascending.
    pub sunrises: Vec<f64>,
    /// Sunset instants inside the coverage window, ascending.
    pub sunsets: Vec<f64>,
    /// Recorded house cusps per system.
    pub houses: Vec<SnapshotHouses>,
    /// Solar eclipse maxima, ascending.
    #[serde(default)]
    pub solar_eclipses: Vec<f64>,
    /// Lunar eclipse maxima, ascending.
    #[serde(default)]
    pub lunar_eclipses: Vec<f64>,
    /// Station instants per graha.
    #[serde(default)]
    pub stations: BTreeMap<Graha, Vec<f64>>,
}

/// Ephemeris provider over a recorded snapshot.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    snapshot: EphemSnapshot,
}

impl StaticEphemeris {
    pub fn new(snapshot: EphemSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &EphemSnapshot {
        &self.snapshot
    }

    fn check_coverage(&self, jd_ut: f64) -> Result<(), EphemError> {
        let (start, end) = self.snapshot.coverage;
        if jd_ut < start || jd_ut > end {
            return Err(EphemError::EphemerisRange("jd outside snapshot coverage"));
        }
        Ok(())
    }
}

fn next_after(instants: &[f64], jd: f64) -> Option<f64> {
    instants.iter().copied().find(|&t| t > jd)
}

fn last_at_or_before(instants: &[f64], jd: f64) -> Option<f64> {
    instants.iter().rev().copied().find(|&t| t <= jd)
}

impl Ephemeris for StaticEphemeris {
    fn body_state(&self, graha: Graha, jd_ut: f64) -> Result<BodyState, EphemError> {
        self.check_coverage(jd_ut)?;
        let state = self
            .snapshot
            .bodies
            .get(&graha)
            .ok_or(EphemError::MissingData("body not in snapshot"))?;
        let dt = jd_ut - self.snapshot.epoch_jd;
        Ok(BodyState {
            longitude: normalize_360(state.longitude + state.speed_longitude * dt),
            latitude: state.latitude + state.speed_latitude * dt,
            speed_longitude: state.speed_longitude,
            speed_latitude: state.speed_latitude,
            retrograde: state.retrograde,
        })
    }

    fn sunrise_before(&self, jd_ut: f64, _geo: &GeoLocation) -> Result<f64, EphemError> {
        self.check_coverage(jd_ut)?;
        last_at_or_before(&self.snapshot.sunrises, jd_ut)
            .ok_or(EphemError::EphemerisRange("no sunrise before jd in snapshot"))
    }

    fn sunrise_after(&self, jd_ut: f64, _geo: &GeoLocation) -> Result<f64, EphemError> {
        self.check_coverage(jd_ut)?;
        next_after(&self.snapshot.sunrises, jd_ut)
            .ok_or(EphemError::EphemerisRange("no sunrise after jd in snapshot"))
    }

    fn sunset_before(&self, jd_ut: f64, _geo: &GeoLocation) -> Result<f64, EphemError> {
        self.check_coverage(jd_ut)?;
        last_at_or_before(&self.snapshot.sunsets, jd_ut)
            .ok_or(EphemError::EphemerisRange("no sunset before jd in snapshot"))
    }

    fn sunset_after(&self, jd_ut: f64, _geo: &GeoLocation) -> Result<f64, EphemError> {
        self.check_coverage(jd_ut)?;
        next_after(&self.snapshot.sunsets, jd_ut)
            .ok_or(EphemError::EphemerisRange("no sunset after jd in snapshot"))
    }

    fn ayanamsha(&self, jd_ut: f64, scheme: Ayanamsha) -> Result<f64, EphemError> {
        self.check_coverage(jd_ut)?;
        self.snapshot
            .ayanamshas
            .get(&scheme)
            .copied()
            .ok_or(EphemError::MissingData("ayanamsha scheme not in snapshot"))
    }

    fn houses(
        &self,
        jd_ut: f64,
        _geo: &GeoLocation,
        system: HouseSystem,
        _scheme: Ayanamsha,
    ) -> Result<RawHouses, EphemError> {
        self.check_coverage(jd_ut)?;
        self.snapshot
            .houses
            .iter()
            .find(|h| h.system == system)
            .map(|h| h.houses)
            .ok_or(EphemError::MissingData("house system not in snapshot"))
    }

    fn solar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError> {
        next_after(&self.snapshot.solar_eclipses, jd_ut)
            .ok_or(EphemError::Unreachable("no solar eclipse in snapshot"))
    }

    fn lunar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError> {
        next_after(&self.snapshot.lunar_eclipses, jd_ut)
            .ok_or(EphemError::Unreachable("no lunar eclipse in snapshot"))
    }

    fn next_station(&self, graha: Graha, jd_ut: f64) -> Result<f64, EphemError> {
        self.snapshot
            .stations
            .get(&graha)
            .and_then(|list| next_after(list, jd_ut))
            .ok_or(EphemError::Unreachable("no station in snapshot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> EphemSnapshot {
        let mut bodies = BTreeMap::new();
        bodies.insert(
            Graha::Surya,
            BodyState {
                longitude: 10.0,
                latitude: 0.0,
                speed_longitude: 1.0,
                speed_latitude: 0.0,
                retrograde: false,
            },
        );
        bodies.insert(
            Graha::Chandra,
            BodyState {
                longitude: 100.0,
                latitude: 2.0,
                speed_longitude: 13.0,
                speed_latitude: 0.1,
                retrograde: false,
            },
        );
        let mut ayanamshas = BTreeMap::new();
        ayanamshas.insert(Ayanamsha::Lahiri, 24.2);
        EphemSnapshot {
            epoch_jd: 2_460_000.0,
            coverage: (2_459_999.0, 2_460_001.0),
            bodies,
            ayanamshas,
            sunrises: vec![2_459_999.75, 2_460_000.75],
            sunsets: vec![2_459_999.25, 2_460_000.25, 2_460_001.25],
            houses: vec![SnapshotHouses {
                system: HouseSystem::WholeSign,
                houses: RawHouses {
                    cusps: [
                        180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 0.0, 30.0, 60.0, 90.0, 120.0,
                        150.0,
                    ],
                    angles: [185.0, 95.0, 5.0, 275.0],
                },
            }],
            solar_eclipses: vec![],
            lunar_eclipses: vec![2_460_000.9],
            stations: BTreeMap::new(),
        }
    }

    #[test]
    fn body_state_propagates_linearly() {
        let eph = StaticEphemeris::new(sample_snapshot());
        let s = eph.body_state(Graha::Surya, 2_460_000.5).unwrap();
        assert!((s.longitude - 10.5).abs() < 1e-12);
        let m = eph.body_state(Graha::Chandra, 2_460_000.5).unwrap();
        assert!((m.longitude - 106.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_coverage_is_range_error() {
        let eph = StaticEphemeris::new(sample_snapshot());
        assert!(matches!(
            eph.body_state(Graha::Surya, 2_459_000.0),
            Err(EphemError::EphemerisRange(_))
        ));
    }

    #[test]
    fn missing_body_is_missing_data() {
        let eph = StaticEphemeris::new(sample_snapshot());
        assert!(matches!(
            eph.body_state(Graha::Shani, 2_460_000.0),
            Err(EphemError::MissingData(_))
        ));
    }

    #[test]
    fn rise_set_lookups() {
        let eph = StaticEphemeris::new(sample_snapshot());
        let geo = GeoLocation::new(12.0, 77.0, 0.0).unwrap();
        assert_eq!(eph.sunrise_before(2_460_000.0, &geo).unwrap(), 2_459_999.75);
        assert_eq!(eph.sunrise_after(2_460_000.0, &geo).unwrap(), 2_460_000.75);
        assert_eq!(eph.sunset_before(2_460_000.5, &geo).unwrap(), 2_460_000.25);
        assert_eq!(eph.sunset_after(2_460_000.5, &geo).unwrap(), 2_460_001.25);
    }

    #[test]
    fn ayanamsha_lookup_and_missing_scheme() {
        let eph = StaticEphemeris::new(sample_snapshot());
        assert_eq!(eph.ayanamsha(2_460_000.0, Ayanamsha::Lahiri).unwrap(), 24.2);
        assert!(matches!(
            eph.ayanamsha(2_460_000.0, Ayanamsha::Raman),
            Err(EphemError::MissingData(_))
        ));
    }

    #[test]
    fn eclipse_and_station_fallbacks() {
        let eph = StaticEphemeris::new(sample_snapshot());
        assert!(matches!(
            eph.solar_eclipse_after(2_460_000.0),
            Err(EphemError::Unreachable(_))
        ));
        assert_eq!(eph.lunar_eclipse_after(2_460_000.0).unwrap(), 2_460_000.9);
        assert!(matches!(
            eph.next_station(Graha::Mangal, 2_460_000.0),
            Err(EphemError::Unreachable(_))
        ));
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let snap = sample_snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: EphemSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.epoch_jd, snap.epoch_jd);
        assert_eq!(back.bodies.len(), snap.bodies.len());
    }
}
