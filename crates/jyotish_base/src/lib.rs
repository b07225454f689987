//! Reference tables and pure jyotish calculations.
//!
//! This crate holds everything that is a function of longitudes and
//! reference data alone: rashi/nakshatra classification, the Vimshottari
//! cycle, dignities and friendships, drishti, the sixteen varga maps, the
//! panchanga element classifiers, the KP sub-lord partition (with the
//! bundled authoritative division table), ashtakavarga, shadbala, bhava
//! bala, tara bala, the Sarvatobhadra chakra, gochara transit tables, and
//! the ashtakoota matching tables.
//!
//! Nothing here touches an ephemeris; the chart layer feeds positions in.
//! All reference tables are process-wide immutable data.

pub mod amsha;
pub mod ashtakavarga;
pub mod bhava;
pub mod drishti;
pub mod error;
pub mod gochara;
pub mod graha;
pub mod hora;
pub mod karana;
pub mod kp;
pub mod kuta;
pub mod nakshatra;
pub mod rashi;
pub mod relationships;
pub mod sarvatobhadra;
pub mod shadbala;
pub mod tara;
pub mod tithi;
pub mod vaar;
pub mod vimshottari;
pub mod yoga;

pub use amsha::{
    SAPTAVARGA, SHADVARGA, SHODASHAVARGA, Varga, varga_longitude, varga_longitudes,
    varga_rashi_info,
};
pub use ashtakavarga::{
    AshtakavargaResult, BhinnaAshtakavarga, BinduStrength, SarvaAshtakavarga,
    calculate_ashtakavarga,
};
pub use bhava::{BhavaBala, bhava_bala};
pub use drishti::{DrishtiEntry, aspects_house, aspects_point, base_virupa, graha_drishti, special_virupa};
pub use error::VedicError;
pub use gochara::{GocharaEffect, GocharaStrength, effect_from_moon, gochara_strength, house_from_moon};
pub use graha::{ALL_GRAHAS, Graha, GrahaClass, GrahaNature, SAPTA_GRAHAS, house_offset, rashi_lord, rashi_lord_by_index};
pub use hora::{HORA_COUNT, HORA_RULERS, hora_ruler_at};
pub use karana::{Karana, KaranaPosition, karana_from_elongation};
pub use kp::{KpPointer, KpSegment, kp_pointer, kp_segment_of, kp_table, sub_lord_of, sub_sub_lord_of};
pub use kuta::{Dosha, KutaScores, dosha_cancelled, has_dosha, kuta_scores};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiElement, RashiInfo, RashiModality, rashi_from_longitude};
pub use relationships::{
    Dignity, NaisargikaMaitri, PanchadhaMaitri, TatkalikaMaitri, dignity_at,
    moon_nature_from_elongation, naisargika_maitri, panchadha_maitri, tatkalika_maitri,
};
pub use sarvatobhadra::{
    ALL_DIRECTIONS, ChakraQuality, Direction, DirectionQuality, SarvatobhadraChakra, build_chakra,
};
pub use shadbala::{
    KalaBalaInputs, ShadbalaInputs, ShadbalaRecord, all_shadbalas, ishta_phala, kashta_phala,
    shadbala, vimshopaka_bala,
};
pub use tara::{Tara, TaraBala, tara_bala, tara_of};
pub use tithi::{Paksha, TithiPosition, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use vimshottari::{
    DashaPeriod, DashaState, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS, dasha_state_at, dasha_years,
};
pub use yoga::{YogaPosition, yoga_from_sum};
