//! Nakshatra (lunar mansion) computation with Vimshottari lords.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each, with 4 padas (quarters) of 3 deg 20'. Each nakshatra is ruled by a
//! graha from the 9-lord Vimshottari cycle, repeated three times to span 27.

use serde::{Deserialize, Serialize};

use jyotish_math::normalize_360;

use crate::graha::Graha;
use crate::vimshottari::VIMSHOTTARI_LORDS;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based traditional number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Vimshottari lord of this nakshatra: the 9-lord cycle repeated thrice.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }

    /// Construct from a 0-based index. Returns None if index >= 27.
    pub fn from_index(idx: u8) -> Option<Nakshatra> {
        ALL_NAKSHATRAS.get(idx as usize).copied()
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Vimshottari lord.
    pub lord: Graha,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra, lord, and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nak_idx) * NAKSHATRA_SPAN;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        lord: nakshatra.lord(),
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(n.number() as usize, i + 1);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn lords_follow_vimshottari_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Krittika.lord(), Graha::Surya);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Mrigashira.lord(), Graha::Mangal);
        assert_eq!(Nakshatra::Ardra.lord(), Graha::Rahu);
        assert_eq!(Nakshatra::Punarvasu.lord(), Graha::Guru);
        assert_eq!(Nakshatra::Pushya.lord(), Graha::Shani);
        assert_eq!(Nakshatra::Ashlesha.lord(), Graha::Buddh);
        // Cycle repeats at Magha and Mula
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn boundaries_strictly_increase() {
        let mut prev = -1i16;
        for k in 0..27 {
            let lon = f64::from(k) * NAKSHATRA_SPAN + 1e-9;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra_index, k as u8);
            assert!(i16::from(info.nakshatra_index) > prev);
            prev = i16::from(info.nakshatra_index);
        }
        // Resets at 360
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra_index, 0);
    }

    #[test]
    fn pada_boundaries() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.pada, 1);
        let info = nakshatra_from_longitude(PADA_SPAN);
        assert_eq!(info.pada, 2);
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN - 1e-9);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn purva_phalguni_pada_2() {
        // Simha 18 deg 56 min = 138.9333 deg → Purva Phalguni pada 2
        let info = nakshatra_from_longitude(138.9333);
        assert_eq!(info.nakshatra, Nakshatra::PurvaPhalguni);
        assert_eq!(info.pada, 2);
        assert_eq!(info.lord, Graha::Shukra);
    }

    #[test]
    fn degrees_in_pada_range() {
        for k in 0..108 {
            let lon = f64::from(k) * PADA_SPAN + 0.1;
            let info = nakshatra_from_longitude(lon);
            assert!(info.degrees_in_pada >= 0.0 && info.degrees_in_pada < PADA_SPAN + 1e-9);
        }
    }
}
