//! Tara bala: the nine-fold classification of a nakshatra counted from
//! the janma (birth) nakshatra.
//!
//! Each tara is a fixed offset from the birth nakshatra, repeating in
//! cycles of nine across the 27 nakshatras. Sampat, Kshema, Sadhaka,
//! Mitra and Ati-Mitra are favourable; Vipat, Pratyak and Vadha are
//! unfavourable; Janma is treated as neutral here (repository convention).

use serde::{Deserialize, Serialize};

/// The nine taras in offset order from the janma nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tara {
    Janma,
    Sampat,
    Vipat,
    Kshema,
    Pratyak,
    Sadhaka,
    Vadha,
    Mitra,
    AtiMitra,
}

/// All nine taras in offset order.
pub const ALL_TARAS: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyak,
    Tara::Sadhaka,
    Tara::Vadha,
    Tara::Mitra,
    Tara::AtiMitra,
];

impl Tara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Janma => "Janma",
            Self::Sampat => "Sampat",
            Self::Vipat => "Vipat",
            Self::Kshema => "Kshema",
            Self::Pratyak => "Pratyak",
            Self::Sadhaka => "Sadhaka",
            Self::Vadha => "Vadha",
            Self::Mitra => "Mitra",
            Self::AtiMitra => "Ati-Mitra",
        }
    }

    /// Offset from the janma nakshatra (0..8), mod 9.
    pub const fn offset(self) -> u8 {
        self as u8
    }

    pub const fn is_favourable(self) -> bool {
        matches!(
            self,
            Self::Sampat | Self::Kshema | Self::Sadhaka | Self::Mitra | Self::AtiMitra
        )
    }

    pub const fn is_unfavourable(self) -> bool {
        matches!(self, Self::Vipat | Self::Pratyak | Self::Vadha)
    }
}

/// Tara of a nakshatra relative to the janma nakshatra (both 0-based).
pub fn tara_of(janma_nakshatra_index: u8, current_nakshatra_index: u8) -> Tara {
    let offset = (i16::from(current_nakshatra_index) - i16::from(janma_nakshatra_index))
        .rem_euclid(9) as usize;
    ALL_TARAS[offset]
}

/// The three nakshatra indices (0-based) carrying a given tara for a
/// janma nakshatra: offset, offset+9 and offset+18 from it.
pub fn tara_nakshatras(janma_nakshatra_index: u8, tara: Tara) -> [u8; 3] {
    core::array::from_fn(|k| {
        ((u16::from(janma_nakshatra_index) + u16::from(tara.offset()) + 9 * k as u16) % 27) as u8
    })
}

/// Tara bala record: the full classification plus the Moon's current tara.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaraBala {
    /// 0-based janma nakshatra index.
    pub janma_nakshatra_index: u8,
    /// 0-based nakshatra index of the transiting Moon.
    pub current_nakshatra_index: u8,
    pub current_tara: Tara,
    /// 0..100 score: favourable 100, janma 50, unfavourable 0.
    pub score: f64,
}

/// Classify the current Moon nakshatra against the janma nakshatra.
pub fn tara_bala(janma_nakshatra_index: u8, current_nakshatra_index: u8) -> TaraBala {
    let current_tara = tara_of(janma_nakshatra_index, current_nakshatra_index);
    let score = if current_tara.is_favourable() {
        100.0
    } else if current_tara.is_unfavourable() {
        0.0
    } else {
        50.0
    };
    TaraBala {
        janma_nakshatra_index,
        current_nakshatra_index,
        current_tara,
        score,
    }
}
