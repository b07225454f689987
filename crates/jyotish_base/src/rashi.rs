//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.
//! Element (fire/earth/air/water) and modality (movable/fixed/dual) drive
//! the varga branch tables.

use serde::{Deserialize, Serialize};

use jyotish_math::{Dms, deg_to_dms, normalize_360, sign_index_of};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Rashi element (for element-started varga branch tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Rashi modality (for modality-started varga branch tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RashiModality {
    Movable,
    Fixed,
    Dual,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Element: fire 0,4,8 / earth 1,5,9 / air 2,6,10 / water 3,7,11.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Modality: movable 0,3,6,9 / fixed 1,4,7,10 / dual 2,5,8,11.
    pub const fn modality(self) -> RashiModality {
        match self.index() % 3 {
            0 => RashiModality::Movable,
            1 => RashiModality::Fixed,
            _ => RashiModality::Dual,
        }
    }

    /// Odd sign in the 1-based sense (Mesha, Mithuna, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Construct from a 0-based index. Returns None if index >= 12.
    pub fn from_index(idx: u8) -> Option<Rashi> {
        ALL_RASHIS.get(idx as usize).copied()
    }
}

/// Element of a rashi by 0-based index.
pub fn rashi_element(rashi_index: u8) -> RashiElement {
    ALL_RASHIS[(rashi_index % 12) as usize].element()
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_index = sign_index_of(lon);
    let degrees_in_rashi = lon - f64::from(rashi_index) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Rashi::Mesha.element(), RashiElement::Fire);
        assert_eq!(Rashi::Vrishabha.element(), RashiElement::Earth);
        assert_eq!(Rashi::Mithuna.element(), RashiElement::Air);
        assert_eq!(Rashi::Karka.element(), RashiElement::Water);
        assert_eq!(Rashi::Simha.element(), RashiElement::Fire);
        assert_eq!(Rashi::Meena.element(), RashiElement::Water);
    }

    #[test]
    fn modalities_cycle() {
        assert_eq!(Rashi::Mesha.modality(), RashiModality::Movable);
        assert_eq!(Rashi::Vrishabha.modality(), RashiModality::Fixed);
        assert_eq!(Rashi::Mithuna.modality(), RashiModality::Dual);
        assert_eq!(Rashi::Makara.modality(), RashiModality::Movable);
    }

    #[test]
    fn odd_even_signs() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Kumbha.is_odd());
        assert!(!Rashi::Meena.is_odd());
    }

    #[test]
    fn rashi_boundaries() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(f64::from(i) * 30.0);
            assert_eq!(info.rashi_index, i);
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_wrap_and_negative() {
        assert_eq!(rashi_from_longitude(365.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(-10.0).rashi, Rashi::Meena);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Rashi::from_index(0), Some(Rashi::Mesha));
        assert_eq!(Rashi::from_index(11), Some(Rashi::Meena));
        assert_eq!(Rashi::from_index(12), None);
    }
}
