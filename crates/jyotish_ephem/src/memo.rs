//! Memoising wrapper over an ephemeris provider.
//!
//! Body-state queries are cached by `(graha, jd bit pattern)` behind a
//! mutex; this is the only mutable state in the system. Cached values are
//! immutable once inserted, so sharing the wrapper across threads is safe.

use std::collections::HashMap;
use std::sync::Mutex;

use jyotish_base::Graha;

use crate::{Ayanamsha, BodyState, Ephemeris, EphemError, GeoLocation, HouseSystem, RawHouses};

/// Caching ephemeris decorator.
pub struct MemoEphemeris<E> {
    inner: E,
    bodies: Mutex<HashMap<(Graha, u64), BodyState>>,
}

impl<E> MemoEphemeris<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            bodies: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached body states (diagnostics).
    pub fn cached_states(&self) -> usize {
        self.bodies.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Ephemeris> Ephemeris for MemoEphemeris<E> {
    fn body_state(&self, graha: Graha, jd_ut: f64) -> Result<BodyState, EphemError> {
        let key = (graha, jd_ut.to_bits());
        if let Ok(cache) = self.bodies.lock() {
            if let Some(state) = cache.get(&key) {
                return Ok(*state);
            }
        }
        let state = self.inner.body_state(graha, jd_ut)?;
        if let Ok(mut cache) = self.bodies.lock() {
            cache.insert(key, state);
        }
        Ok(state)
    }

    fn sunrise_before(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError> {
        self.inner.sunrise_before(jd_ut, geo)
    }

    fn sunrise_after(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError> {
        self.inner.sunrise_after(jd_ut, geo)
    }

    fn sunset_before(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError> {
        self.inner.sunset_before(jd_ut, geo)
    }

    fn sunset_after(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError> {
        self.inner.sunset_after(jd_ut, geo)
    }

    fn ayanamsha(&self, jd_ut: f64, scheme: Ayanamsha) -> Result<f64, EphemError> {
        self.inner.ayanamsha(jd_ut, scheme)
    }

    fn houses(
        &self,
        jd_ut: f64,
        geo: &GeoLocation,
        system: HouseSystem,
        scheme: Ayanamsha,
    ) -> Result<RawHouses, EphemError> {
        self.inner.houses(jd_ut, geo, system, scheme)
    }

    fn solar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError> {
        self.inner.solar_eclipse_after(jd_ut)
    }

    fn lunar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError> {
        self.inner.lunar_eclipse_after(jd_ut)
    }

    fn next_station(&self, graha: Graha, jd_ut: f64) -> Result<f64, EphemError> {
        self.inner.next_station(graha, jd_ut)
    }
}
