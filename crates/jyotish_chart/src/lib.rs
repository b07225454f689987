//! Chart assembly and derived Vedic records.
//!
//! This crate turns an ephemeris provider plus a chart input into the full
//! set of structured results: the sidereal chart itself, varga
//! projections, panchanga elements with muhurta periods, KP pointers,
//! shadbala and bhava bala, ashtakavarga, gochara transits, compatibility,
//! Sarvatobhadra, and the read-only report facade.
//!
//! Every derived record is a pure function of the immutable chart;
//! independent records may be built concurrently without coordination.

pub mod ashta;
pub mod chart;
pub mod compat;
pub mod error;
pub mod input;
pub mod kp_chart;
pub mod panchanga;
pub mod report;
pub mod sarva;
pub mod strength;
pub mod transit;
pub mod varga;

#[doc(hidden)]
pub mod testutil;

pub use ashta::{TransitBindu, natal_ashtakavarga, transit_bindus};
pub use chart::{Angle, AngleId, BodyPosition, Chart, HouseCusp};
pub use compat::{CompatibilityLevel, CompatibilityRecord, DoshaFinding, compatibility};
pub use error::ChartError;
pub use input::{ChartInput, CivilDateTime};
pub use kp_chart::{KpReport, kp_report};
pub use panchanga::{
    DayFrame, MuhurtaPeriods, PanchangaInfo, Period, day_frame, hora_periods, muhurta_periods,
    panchanga_of_chart,
};
pub use report::{BodySummary, ChartReport};
pub use sarva::{SarvatobhadraReport, sarvatobhadra_report};
pub use strength::{StrengthReport, strength_report};
pub use transit::{GocharaRecord, gochara_records};
pub use varga::{VargaChart, VargaPosition};
