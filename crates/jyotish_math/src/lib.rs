//! Angle and time primitives shared by the jyotish crates.
//!
//! This crate provides:
//! - Circle arithmetic on ecliptic longitudes (normalisation, arc distances)
//! - Sign/DMS decomposition of a longitude
//! - Julian Date ↔ proleptic Gregorian calendar conversion
//! - Weekday extraction with both Sunday-indexed and Monday-indexed forms
//!
//! The calendar formulas follow Meeus, "Astronomical Algorithms"
//! (2nd ed.); the rest is elementary circle arithmetic.

pub mod angle;
pub mod julian;

pub use angle::{
    Dms, closest_distance, deg_to_dms, distance, dms_to_deg, ecliptic_declination,
    normalize_360, sign_index_of, sign_longitude,
};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, civil_to_jd_utc, jd_to_calendar,
    jd_utc_to_civil, monday_indexed_weekday, weekday_from_jd,
};
