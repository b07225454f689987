//! The ephemeris port: the synchronous interface the chart layer calls for
//! body coordinates, rise/set instants, ayanamsha values, house cusps,
//! eclipse maxima, and station instants.
//!
//! The engine never computes raw astronomy itself; providers implement
//! [`Ephemeris`]. Two providers ship here: [`StaticEphemeris`], which
//! serves a recorded snapshot (the test fixture and the CLI input format),
//! and [`MemoEphemeris`], a caching wrapper for providers whose queries
//! are not cheap.

pub mod error;
pub mod memo;
pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use error::EphemError;
pub use memo::MemoEphemeris;
pub use snapshot::{EphemSnapshot, SnapshotHouses, StaticEphemeris};

use jyotish_base::Graha;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, [-90, +90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, +180], east positive.
    pub longitude: f64,
    /// Altitude above mean sea level in metres.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Validate ranges; `BadInput` names the offending field.
    pub fn new(latitude: f64, longitude: f64, altitude_m: f64) -> Result<Self, EphemError> {
        if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
            return Err(EphemError::BadInput("latitude"));
        }
        if !(-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
            return Err(EphemError::BadInput("longitude"));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude_m,
        })
    }
}

/// Ayanamsha scheme tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ayanamsha {
    Lahiri,
    Raman,
    Krishnamurti,
    Yukteshwar,
    JnBhasin,
    SuryaSiddhanta,
    Aryabhata,
    TrueCitra,
    TrueRevati,
}

/// All supported ayanamsha tags.
pub const ALL_AYANAMSHAS: [Ayanamsha; 9] = [
    Ayanamsha::Lahiri,
    Ayanamsha::Raman,
    Ayanamsha::Krishnamurti,
    Ayanamsha::Yukteshwar,
    Ayanamsha::JnBhasin,
    Ayanamsha::SuryaSiddhanta,
    Ayanamsha::Aryabhata,
    Ayanamsha::TrueCitra,
    Ayanamsha::TrueRevati,
];

impl Ayanamsha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
            Self::Yukteshwar => "Yukteshwar",
            Self::JnBhasin => "JN-Bhasin",
            Self::SuryaSiddhanta => "Surya-Siddhanta",
            Self::Aryabhata => "Aryabhata",
            Self::TrueCitra => "True-Citra",
            Self::TrueRevati => "True-Revati",
        }
    }

    /// Parse a user-facing tag (case-insensitive, `-`/`_` interchangeable).
    pub fn parse(tag: &str) -> Option<Self> {
        let t = tag.to_ascii_lowercase().replace('_', "-");
        ALL_AYANAMSHAS
            .iter()
            .copied()
            .find(|a| a.name().to_ascii_lowercase() == t)
    }
}

/// House system tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    WholeSign,
    Equal,
    Placidus,
    Koch,
    Porphyrius,
    Regiomontanus,
    Campanus,
    Meridian,
    Morinus,
}

/// All supported house systems.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 9] = [
    HouseSystem::WholeSign,
    HouseSystem::Equal,
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Porphyrius,
    HouseSystem::Regiomontanus,
    HouseSystem::Campanus,
    HouseSystem::Meridian,
    HouseSystem::Morinus,
];

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "Whole-Sign",
            Self::Equal => "Equal",
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Porphyrius => "Porphyrius",
            Self::Regiomontanus => "Regiomontanus",
            Self::Campanus => "Campanus",
            Self::Meridian => "Meridian",
            Self::Morinus => "Morinus",
        }
    }

    /// Parse a user-facing tag (case-insensitive, `-`/`_` interchangeable).
    pub fn parse(tag: &str) -> Option<Self> {
        let t = tag.to_ascii_lowercase().replace('_', "-");
        ALL_HOUSE_SYSTEMS
            .iter()
            .copied()
            .find(|h| h.name().to_ascii_lowercase() == t)
    }
}

/// Tropical state of one body at one instant.
///
/// Constructors require every field; the engine never fills gaps with
/// zeros on a provider's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Tropical ecliptic longitude, degrees.
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Longitude speed, degrees per day.
    pub speed_longitude: f64,
    /// Latitude speed, degrees per day.
    pub speed_latitude: f64,
    /// Retrograde flag; must agree with `speed_longitude < 0` for bodies
    /// that support it (nodes are conventionally retrograde).
    pub retrograde: bool,
}

/// Raw sidereal house cusps and angles from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawHouses {
    /// Twelve sidereal cusp longitudes, house 1 first.
    pub cusps: [f64; 12],
    /// Ascendant, MC, Descendant, IC sidereal longitudes.
    pub angles: [f64; 4],
}

/// The ephemeris collaborator interface.
///
/// All methods are synchronous and pure from the caller's point of view.
/// Implementations are free to be expensive; wrap them in
/// [`MemoEphemeris`] when repeated queries matter.
pub trait Ephemeris {
    /// Tropical state of a graha at a JD (UT).
    fn body_state(&self, graha: Graha, jd_ut: f64) -> Result<BodyState, EphemError>;

    /// Last sunrise at or before `jd_ut` at the location.
    fn sunrise_before(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError>;

    /// First sunrise after `jd_ut`.
    fn sunrise_after(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError>;

    /// Last sunset at or before `jd_ut`.
    fn sunset_before(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError>;

    /// First sunset after `jd_ut`.
    fn sunset_after(&self, jd_ut: f64, geo: &GeoLocation) -> Result<f64, EphemError>;

    /// Ayanamsha value in degrees for the scheme at a JD (UT).
    fn ayanamsha(&self, jd_ut: f64, scheme: Ayanamsha) -> Result<f64, EphemError>;

    /// Sidereal house cusps and angles.
    fn houses(
        &self,
        jd_ut: f64,
        geo: &GeoLocation,
        system: HouseSystem,
        scheme: Ayanamsha,
    ) -> Result<RawHouses, EphemError>;

    /// JD of the next solar eclipse maximum after `jd_ut`.
    fn solar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// JD of the next lunar eclipse maximum after `jd_ut`.
    fn lunar_eclipse_after(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// JD of the next station (direction change) of a graha after `jd_ut`.
    fn next_station(&self, graha: Graha, jd_ut: f64) -> Result<f64, EphemError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_validation() {
        assert!(GeoLocation::new(12.97, 77.59, 0.0).is_ok());
        assert!(matches!(
            GeoLocation::new(91.0, 0.0, 0.0),
            Err(EphemError::BadInput("latitude"))
        ));
        assert!(matches!(
            GeoLocation::new(0.0, 181.0, 0.0),
            Err(EphemError::BadInput("longitude"))
        ));
        assert!(matches!(
            GeoLocation::new(f64::NAN, 0.0, 0.0),
            Err(EphemError::BadInput("latitude"))
        ));
    }

    #[test]
    fn ayanamsha_parse() {
        assert_eq!(Ayanamsha::parse("lahiri"), Some(Ayanamsha::Lahiri));
        assert_eq!(Ayanamsha::parse("Krishnamurti"), Some(Ayanamsha::Krishnamurti));
        assert_eq!(Ayanamsha::parse("true_citra"), Some(Ayanamsha::TrueCitra));
        assert_eq!(Ayanamsha::parse("surya-siddhanta"), Some(Ayanamsha::SuryaSiddhanta));
        assert_eq!(Ayanamsha::parse("unknown"), None);
    }

    #[test]
    fn house_system_parse() {
        assert_eq!(HouseSystem::parse("whole-sign"), Some(HouseSystem::WholeSign));
        assert_eq!(HouseSystem::parse("PLACIDUS"), Some(HouseSystem::Placidus));
        assert_eq!(HouseSystem::parse("koch"), Some(HouseSystem::Koch));
        assert_eq!(HouseSystem::parse("nope"), None);
    }

    #[test]
    fn all_tags_roundtrip_through_parse() {
        for a in ALL_AYANAMSHAS {
            assert_eq!(Ayanamsha::parse(a.name()), Some(a));
        }
        for h in ALL_HOUSE_SYSTEMS {
            assert_eq!(HouseSystem::parse(h.name()), Some(h));
        }
    }
}
