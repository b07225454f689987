//! KP (Krishnamurti Paddhati) sub-lord partition of the zodiac.
//!
//! The 120-year Vimshottari scheme induces, within any span (the zodiac, a
//! nakshatra, or a sub), nine sub-spans of width `span * years / 120` in
//! cyclic order starting at the span's own lord. The zodiac → nakshatra
//! split already fixes the nakshatra lord; one pass inside the nakshatra
//! yields the sub-lord, and one more the sub-sub-lord.
//!
//! All boundaries are exact in integer arcseconds (a nakshatra spans
//! 48000", a sub `400 * years`"), so the closed form and the bundled
//! division table agree bit for bit. The table
//! (`data/kp_sublords.csv`, 249 rows) remains authoritative: segments that
//! straddle a sign boundary are split there, which is where the row count
//! exceeds 27 x 9 = 243.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use jyotish_math::normalize_360;

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord_by_index};
use crate::nakshatra::nakshatra_from_longitude;
use crate::vimshottari::{VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS};

/// Arcseconds in one nakshatra (13 deg 20 min).
const NAKSHATRA_ARCSEC: f64 = 48_000.0;

/// Arcseconds in the full circle.
const CIRCLE_ARCSEC: f64 = 1_296_000.0;

/// The KP pointer: the four lords governing a zodiacal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpPointer {
    pub sign_lord: Graha,
    pub nakshatra_lord: Graha,
    pub sub_lord: Graha,
    pub sub_sub_lord: Graha,
}

impl KpPointer {
    /// Traditional abbreviated rendering, e.g. `Sun-Ven-Rah-Sat`.
    pub fn notation(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.sign_lord.abbrev(),
            self.nakshatra_lord.abbrev(),
            self.sub_lord.abbrev(),
            self.sub_sub_lord.abbrev()
        )
    }
}

/// One row of the sub-lord division table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpSegment {
    /// Start of the segment, absolute arcseconds in [0, 1296000).
    pub from_arcsec: u32,
    /// Exclusive end of the segment, absolute arcseconds.
    pub to_arcsec: u32,
    /// 0-based rashi index the segment lies in.
    pub rashi_index: u8,
    /// 0-based nakshatra index.
    pub nakshatra_index: u8,
    pub rasi_lord: Graha,
    pub nakshatra_lord: Graha,
    pub sub_lord: Graha,
}

/// Split a span into the nine Vimshottari sub-spans starting at `lord`.
///
/// Returns the sub lord and the (offset, width) of the sub containing
/// `offset_in_span`, all in the span's own units.
fn vimshottari_split(span: f64, offset_in_span: f64, lord: Graha) -> (Graha, f64, f64) {
    let start = crate::vimshottari::cycle_index(lord).unwrap_or(0) as usize;
    let mut pos = 0.0;
    for k in 0..9 {
        let idx = (start + k) % 9;
        let width = span * VIMSHOTTARI_YEARS[idx] / 120.0;
        if offset_in_span < pos + width || k == 8 {
            return (VIMSHOTTARI_LORDS[idx], pos, width);
        }
        pos += width;
    }
    (lord, 0.0, span) // unreachable: k == 8 arm returns
}

/// Sub-lord of a sidereal longitude (closed form).
pub fn sub_lord_of(sidereal_lon: f64) -> Graha {
    let arcsec = normalize_360(sidereal_lon) * 3600.0;
    let nak_idx = ((arcsec / NAKSHATRA_ARCSEC).floor() as usize).min(26);
    let offset = arcsec - nak_idx as f64 * NAKSHATRA_ARCSEC;
    let nak_lord = VIMSHOTTARI_LORDS[nak_idx % 9];
    vimshottari_split(NAKSHATRA_ARCSEC, offset, nak_lord).0
}

/// Sub-sub-lord of a sidereal longitude (closed form).
pub fn sub_sub_lord_of(sidereal_lon: f64) -> Graha {
    let arcsec = normalize_360(sidereal_lon) * 3600.0;
    let nak_idx = ((arcsec / NAKSHATRA_ARCSEC).floor() as usize).min(26);
    let offset = arcsec - nak_idx as f64 * NAKSHATRA_ARCSEC;
    let nak_lord = VIMSHOTTARI_LORDS[nak_idx % 9];
    let (sub, sub_start, sub_width) = vimshottari_split(NAKSHATRA_ARCSEC, offset, nak_lord);
    vimshottari_split(sub_width, offset - sub_start, sub).0
}

/// The full KP pointer of a sidereal longitude.
pub fn kp_pointer(sidereal_lon: f64) -> KpPointer {
    let lon = normalize_360(sidereal_lon);
    let info = nakshatra_from_longitude(lon);
    let sign_lord = rashi_lord_by_index(jyotish_math::sign_index_of(lon))
        .unwrap_or(Graha::Surya); // sign index is always < 12
    KpPointer {
        sign_lord,
        nakshatra_lord: info.lord,
        sub_lord: sub_lord_of(lon),
        sub_sub_lord: sub_sub_lord_of(lon),
    }
}

// ---------------------------------------------------------------------------
// Bundled division table
// ---------------------------------------------------------------------------

const KP_TABLE_CSV: &str = include_str!("../data/kp_sublords.csv");

fn graha_from_csv_name(name: &str) -> Result<Graha, VedicError> {
    match name {
        "Sun" => Ok(Graha::Surya),
        "Moon" => Ok(Graha::Chandra),
        "Mars" => Ok(Graha::Mangal),
        "Mercury" => Ok(Graha::Buddh),
        "Jupiter" => Ok(Graha::Guru),
        "Venus" => Ok(Graha::Shukra),
        "Saturn" => Ok(Graha::Shani),
        "Rahu" => Ok(Graha::Rahu),
        "Ketu" => Ok(Graha::Ketu),
        _ => Err(VedicError::MissingData("unknown planet name in KP table")),
    }
}

fn rashi_index_from_csv_name(name: &str) -> Result<u8, VedicError> {
    const WESTERN: [&str; 12] = [
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
        "Capricorn",
        "Aquarius",
        "Pisces",
    ];
    WESTERN
        .iter()
        .position(|&s| s == name)
        .map(|i| i as u8)
        .ok_or(VedicError::MissingData("unknown sign name in KP table"))
}

fn arcsec_from_dms(dms: &str) -> Result<u32, VedicError> {
    let mut parts = dms.split(':');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or(VedicError::MissingData("malformed DMS in KP table"))
    };
    let d = next()?;
    let m = next()?;
    let s = next()?;
    Ok(d * 3600 + m * 60 + s)
}

fn parse_table(csv: &str) -> Result<Vec<KpSegment>, VedicError> {
    let mut rows = Vec::with_capacity(249);
    for line in csv.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 7 {
            return Err(VedicError::MissingData("KP table row has wrong arity"));
        }
        let rashi_index = rashi_index_from_csv_name(fields[0])?;
        let nakshatra_index = crate::nakshatra::ALL_NAKSHATRAS
            .iter()
            .position(|n| n.name() == fields[1])
            .ok_or(VedicError::MissingData("unknown nakshatra name in KP table"))?
            as u8;
        let base = u32::from(rashi_index) * 108_000;
        rows.push(KpSegment {
            from_arcsec: base + arcsec_from_dms(fields[2])?,
            to_arcsec: base + arcsec_from_dms(fields[3])?,
            rashi_index,
            nakshatra_index,
            rasi_lord: graha_from_csv_name(fields[4])?,
            nakshatra_lord: graha_from_csv_name(fields[5])?,
            sub_lord: graha_from_csv_name(fields[6])?,
        });
    }
    if rows.len() != 249 {
        return Err(VedicError::MissingData("KP table must have 249 rows"));
    }
    Ok(rows)
}

static KP_TABLE: LazyLock<Result<Vec<KpSegment>, VedicError>> =
    LazyLock::new(|| parse_table(KP_TABLE_CSV));

/// The bundled 249-row sub-lord division table.
pub fn kp_table() -> Result<&'static [KpSegment], VedicError> {
    match &*KP_TABLE {
        Ok(rows) => Ok(rows.as_slice()),
        Err(e) => Err(e.clone()),
    }
}

/// Table lookup of the segment containing a longitude.
pub fn kp_segment_of(sidereal_lon: f64) -> Result<&'static KpSegment, VedicError> {
    let arcsec = normalize_360(sidereal_lon) * 3600.0;
    let rows = kp_table()?;
    rows.iter()
        .find(|r| f64::from(r.from_arcsec) <= arcsec && arcsec < f64::from(r.to_arcsec))
        .ok_or(VedicError::MissingData("longitude not covered by KP table"))
}
