//! Ashtakoota (eight kuta) matching tables and dosha rules.
//!
//! Each kuta is a small table lookup over the two Moons' nakshatras, signs
//! and lords, with fixed maxima summing to 36: varna 1, vashya 2, tara 3,
//! yoni 4, graha maitri 5, gana 6, bhakuta 7, nadi 8. Dosha detection and
//! cancellation use whole-house patterns. The score tables shipped here
//! are the repository's encodings and are regression-locked.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, house_offset, rashi_lord_by_index};
use crate::relationships::{NaisargikaMaitri, naisargika_maitri};
use crate::tara::{Tara, tara_of};

/// Per-kuta maxima in Ashtakoota order.
pub const KUTA_MAXIMA: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// Maximum total kuta score.
pub const KUTA_TOTAL_MAX: f64 = 36.0;

// ---------------------------------------------------------------------------
// Varna (1)
// ---------------------------------------------------------------------------

/// Varna class of a Moon sign: water Brahmin, fire Kshatriya, earth
/// Vaishya, air Shudra. Higher rank = 3..0.
pub fn varna_rank(moon_rashi_idx: u8) -> u8 {
    match moon_rashi_idx % 4 {
        3 => 3, // water
        0 => 2, // fire
        1 => 1, // earth
        _ => 0, // air
    }
}

/// Varna kuta: 1 when the groom's varna is not below the bride's.
pub fn varna_kuta(groom_moon_rashi: u8, bride_moon_rashi: u8) -> f64 {
    if varna_rank(groom_moon_rashi) >= varna_rank(bride_moon_rashi) {
        1.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Vashya (2)
// ---------------------------------------------------------------------------

/// Vashya group of a Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vashya {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

/// Group assignment by sign (whole-sign convention).
pub fn vashya_group(moon_rashi_idx: u8) -> Vashya {
    match moon_rashi_idx {
        0 | 1 | 8 | 9 => Vashya::Chatushpada,
        2 | 5 | 6 | 10 => Vashya::Manava,
        3 | 11 => Vashya::Jalachara,
        4 => Vashya::Vanachara,
        _ => Vashya::Keeta, // 7
    }
}

const fn vashya_slot(v: Vashya) -> usize {
    match v {
        Vashya::Chatushpada => 0,
        Vashya::Manava => 1,
        Vashya::Jalachara => 2,
        Vashya::Vanachara => 3,
        Vashya::Keeta => 4,
    }
}

/// Symmetric vashya score table, max 2.
const VASHYA_SCORES: [[f64; 5]; 5] = [
    [2.0, 1.0, 1.0, 0.5, 1.0],
    [1.0, 2.0, 0.5, 0.0, 1.0],
    [1.0, 0.5, 2.0, 1.0, 1.0],
    [0.5, 0.0, 1.0, 2.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 2.0],
];

/// Vashya kuta over the two Moon signs.
pub fn vashya_kuta(groom_moon_rashi: u8, bride_moon_rashi: u8) -> f64 {
    VASHYA_SCORES[vashya_slot(vashya_group(groom_moon_rashi))]
        [vashya_slot(vashya_group(bride_moon_rashi))]
}

// ---------------------------------------------------------------------------
// Tara (3)
// ---------------------------------------------------------------------------

/// Tara kuta: each direction contributes 1.5 unless the count lands on
/// vipat, pratyak or vadha.
pub fn tara_kuta(groom_moon_nak: u8, bride_moon_nak: u8) -> f64 {
    let one = |from: u8, to: u8| -> f64 {
        match tara_of(from, to) {
            Tara::Vipat | Tara::Pratyak | Tara::Vadha => 0.0,
            _ => 1.5,
        }
    };
    one(bride_moon_nak, groom_moon_nak) + one(groom_moon_nak, bride_moon_nak)
}

// ---------------------------------------------------------------------------
// Yoni (4)
// ---------------------------------------------------------------------------

/// The fourteen yoni animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Yoni of each nakshatra (0-based index).
pub const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Horse,    // Ashwini
    Yoni::Elephant, // Bharani
    Yoni::Sheep,    // Krittika
    Yoni::Serpent,  // Rohini
    Yoni::Serpent,  // Mrigashira
    Yoni::Dog,      // Ardra
    Yoni::Cat,      // Punarvasu
    Yoni::Sheep,    // Pushya
    Yoni::Cat,      // Ashlesha
    Yoni::Rat,      // Magha
    Yoni::Rat,      // Purva Phalguni
    Yoni::Cow,      // Uttara Phalguni
    Yoni::Buffalo,  // Hasta
    Yoni::Tiger,    // Chitra
    Yoni::Buffalo,  // Swati
    Yoni::Tiger,    // Vishakha
    Yoni::Deer,     // Anuradha
    Yoni::Deer,     // Jyeshtha
    Yoni::Dog,      // Mula
    Yoni::Monkey,   // Purva Ashadha
    Yoni::Mongoose, // Uttara Ashadha
    Yoni::Monkey,   // Shravana
    Yoni::Lion,     // Dhanishtha
    Yoni::Horse,    // Shatabhisha
    Yoni::Lion,     // Purva Bhadrapada
    Yoni::Cow,      // Uttara Bhadrapada
    Yoni::Elephant, // Revati
];

/// Symmetric yoni compatibility matrix, max 4; sworn-enemy pairs score 0.
const YONI_SCORES: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
];

/// Yoni kuta over the two Moon nakshatras.
pub fn yoni_kuta(groom_moon_nak: u8, bride_moon_nak: u8) -> f64 {
    let a = NAKSHATRA_YONI[(groom_moon_nak % 27) as usize] as usize;
    let b = NAKSHATRA_YONI[(bride_moon_nak % 27) as usize] as usize;
    f64::from(YONI_SCORES[a][b])
}

// ---------------------------------------------------------------------------
// Graha maitri (5)
// ---------------------------------------------------------------------------

/// Graha maitri kuta: natural friendship between the two Moon-sign lords,
/// taken in both directions.
pub fn graha_maitri_kuta(groom_moon_rashi: u8, bride_moon_rashi: u8) -> f64 {
    let l1 = rashi_lord_by_index(groom_moon_rashi % 12).unwrap_or(Graha::Surya);
    let l2 = rashi_lord_by_index(bride_moon_rashi % 12).unwrap_or(Graha::Surya);
    if l1 == l2 {
        return 5.0;
    }
    use NaisargikaMaitri as N;
    match (naisargika_maitri(l1, l2), naisargika_maitri(l2, l1)) {
        (N::Friend, N::Friend) => 5.0,
        (N::Friend, N::Neutral) | (N::Neutral, N::Friend) => 4.0,
        (N::Neutral, N::Neutral) => 3.0,
        (N::Friend, N::Enemy) | (N::Enemy, N::Friend) => 1.0,
        (N::Neutral, N::Enemy) | (N::Enemy, N::Neutral) => 0.5,
        (N::Enemy, N::Enemy) => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Gana (6)
// ---------------------------------------------------------------------------

/// The three ganas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Gana of each nakshatra (0-based index).
pub fn nakshatra_gana(nak_idx: u8) -> Gana {
    match nak_idx % 27 {
        0 | 4 | 6 | 7 | 12 | 14 | 16 | 21 | 26 => Gana::Deva,
        1 | 3 | 5 | 10 | 11 | 19 | 20 | 24 | 25 => Gana::Manushya,
        _ => Gana::Rakshasa,
    }
}

/// Gana kuta: same gana 6, deva-manushya 5, deva-rakshasa 1,
/// manushya-rakshasa 0.
pub fn gana_kuta(groom_moon_nak: u8, bride_moon_nak: u8) -> f64 {
    use Gana::*;
    match (nakshatra_gana(groom_moon_nak), nakshatra_gana(bride_moon_nak)) {
        (a, b) if a == b => 6.0,
        (Deva, Manushya) | (Manushya, Deva) => 5.0,
        (Deva, Rakshasa) | (Rakshasa, Deva) => 1.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Bhakuta (7)
// ---------------------------------------------------------------------------

/// Bhakuta kuta: the mutual sign-distance pair. Same sign, 7/7, 3/11 and
/// 4/10 score the full 7; the 2/12, 5/9 and 6/8 pairs score 0.
pub fn bhakuta_kuta(groom_moon_rashi: u8, bride_moon_rashi: u8) -> f64 {
    let d1 = house_offset(groom_moon_rashi, bride_moon_rashi);
    let d2 = house_offset(bride_moon_rashi, groom_moon_rashi);
    let pair = (d1.min(d2), d1.max(d2));
    match pair {
        (1, 1) | (7, 7) | (3, 11) | (4, 10) => 7.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Nadi (8)
// ---------------------------------------------------------------------------

/// The three nadis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Nadi of each nakshatra: the traditional zigzag
/// Adi-Madhya-Antya-Antya-Madhya-Adi-Adi-Madhya-Antya per nine.
pub fn nakshatra_nadi(nak_idx: u8) -> Nadi {
    const CYCLE: [Nadi; 9] = [
        Nadi::Adi,
        Nadi::Madhya,
        Nadi::Antya,
        Nadi::Antya,
        Nadi::Madhya,
        Nadi::Adi,
        Nadi::Adi,
        Nadi::Madhya,
        Nadi::Antya,
    ];
    CYCLE[(nak_idx % 9) as usize]
}

/// Nadi kuta: different nadis 8, same nadi 0 (nadi dosha).
pub fn nadi_kuta(groom_moon_nak: u8, bride_moon_nak: u8) -> f64 {
    if nakshatra_nadi(groom_moon_nak) == nakshatra_nadi(bride_moon_nak) {
        0.0
    } else {
        8.0
    }
}

// ---------------------------------------------------------------------------
// Combined kuta scores
// ---------------------------------------------------------------------------

/// The eight kuta scores of a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KutaScores {
    pub varna: f64,
    pub vashya: f64,
    pub tara: f64,
    pub yoni: f64,
    pub graha_maitri: f64,
    pub gana: f64,
    pub bhakuta: f64,
    pub nadi: f64,
}

impl KutaScores {
    pub fn total(&self) -> f64 {
        self.varna
            + self.vashya
            + self.tara
            + self.yoni
            + self.graha_maitri
            + self.gana
            + self.bhakuta
            + self.nadi
    }
}

/// All eight kutas from the two Moons (0-based nakshatra and rashi
/// indices; groom first).
pub fn kuta_scores(
    groom_moon_nak: u8,
    groom_moon_rashi: u8,
    bride_moon_nak: u8,
    bride_moon_rashi: u8,
) -> KutaScores {
    KutaScores {
        varna: varna_kuta(groom_moon_rashi, bride_moon_rashi),
        vashya: vashya_kuta(groom_moon_rashi, bride_moon_rashi),
        tara: tara_kuta(groom_moon_nak, bride_moon_nak),
        yoni: yoni_kuta(groom_moon_nak, bride_moon_nak),
        graha_maitri: graha_maitri_kuta(groom_moon_rashi, bride_moon_rashi),
        gana: gana_kuta(groom_moon_nak, bride_moon_nak),
        bhakuta: bhakuta_kuta(groom_moon_rashi, bride_moon_rashi),
        nadi: nadi_kuta(groom_moon_nak, bride_moon_nak),
    }
}

// ---------------------------------------------------------------------------
// Doshas
// ---------------------------------------------------------------------------

/// The dosha kinds checked in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    /// Mars in 1/2/4/7/8/12 from the lagna.
    Mangal,
    /// Mars in 1/2/4/7/8/12 from the Moon.
    Kuja,
    /// Saturn in 1/4/7/8/12 from the lagna.
    Shani,
    /// Sun or Moon sharing a sign with Rahu or Ketu.
    Grahan,
}

const MANGAL_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];
const SHANI_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

/// Detect one dosha from whole-sign positions.
///
/// `graha_rashis` holds the nine graha sign indices, `lagna_rashi` the
/// ascendant sign.
pub fn has_dosha(dosha: Dosha, graha_rashis: &[u8; 9], lagna_rashi: u8) -> bool {
    let mars = graha_rashis[Graha::Mangal.index() as usize];
    let moon = graha_rashis[Graha::Chandra.index() as usize];
    match dosha {
        Dosha::Mangal => MANGAL_HOUSES.contains(&house_offset(lagna_rashi, mars)),
        Dosha::Kuja => MANGAL_HOUSES.contains(&house_offset(moon, mars)),
        Dosha::Shani => {
            let saturn = graha_rashis[Graha::Shani.index() as usize];
            SHANI_HOUSES.contains(&house_offset(lagna_rashi, saturn))
        }
        Dosha::Grahan => {
            let sun = graha_rashis[Graha::Surya.index() as usize];
            let rahu = graha_rashis[Graha::Rahu.index() as usize];
            let ketu = graha_rashis[Graha::Ketu.index() as usize];
            sun == rahu || sun == ketu || moon == rahu || moon == ketu
        }
    }
}

/// Mutual-dosha and benefic-aspect cancellation for the Mars doshas.
///
/// Cancelled when both charts carry the dosha, or when Jupiter or Venus
/// occupies a kendra from the afflicted chart's lagna or casts its
/// whole-house aspect onto Mars.
pub fn dosha_cancelled(
    dosha_in_1: bool,
    dosha_in_2: bool,
    afflicted_graha_rashis: &[u8; 9],
    afflicted_lagna_rashi: u8,
) -> bool {
    if dosha_in_1 && dosha_in_2 {
        return true;
    }
    if !(dosha_in_1 || dosha_in_2) {
        return false;
    }
    let mars = afflicted_graha_rashis[Graha::Mangal.index() as usize];
    for benefic in [Graha::Guru, Graha::Shukra] {
        let pos = afflicted_graha_rashis[benefic.index() as usize];
        if matches!(house_offset(afflicted_lagna_rashi, pos), 1 | 4 | 7 | 10) {
            return true;
        }
        let dist = (i16::from(mars) - i16::from(pos)).rem_euclid(12) as u8;
        if crate::drishti::aspects_house(benefic, dist) {
            return true;
        }
    }
    false
}
