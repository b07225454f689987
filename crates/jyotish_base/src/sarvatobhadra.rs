//! Sarvatobhadra chakra: the 9x9 nakshatra grid and its direction cells.
//!
//! The grid is filled along a fixed 81-cell spiral from the centre (4,4),
//! which holds the janma nakshatra; every subsequent cell advances one
//! nakshatra mod 27. Nine named directions map to fixed cell lists.
//! Direction quality aggregates the benefic/malefic occupants and the tara
//! standing of the direction's nakshatras.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, GrahaNature};
use crate::tara::{Tara, tara_of};

/// The fixed 81-cell spiral fill order, (row, col) from the centre out.
const SPIRAL: [(u8, u8); 81] = [
    (4, 4), (4, 5), (3, 5), (3, 4), (3, 3), (4, 3), (5, 3), (5, 4), (5, 5),
    (5, 6), (4, 6), (3, 6), (2, 6), (2, 5), (2, 4), (2, 3), (2, 2), (3, 2),
    (4, 2), (5, 2), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7), (5, 7),
    (4, 7), (3, 7), (2, 7), (1, 7), (1, 6), (1, 5), (1, 4), (1, 3), (1, 2),
    (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1), (7, 2), (7, 3),
    (7, 4), (7, 5), (7, 6), (7, 7), (7, 8), (6, 8), (5, 8), (4, 8), (3, 8),
    (2, 8), (1, 8), (0, 8), (0, 7), (0, 6), (0, 5), (0, 4), (0, 3), (0, 2),
    (0, 1), (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0),
    (8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5), (8, 6), (8, 7), (8, 8),
];

/// The nine named directions of the chakra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Center,
}

/// All nine directions.
pub const ALL_DIRECTIONS: [Direction; 9] = [
    Direction::North,
    Direction::Northeast,
    Direction::East,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::West,
    Direction::Northwest,
    Direction::Center,
];

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Northeast => "Northeast",
            Self::East => "East",
            Self::Southeast => "Southeast",
            Self::South => "South",
            Self::Southwest => "Southwest",
            Self::West => "West",
            Self::Northwest => "Northwest",
            Self::Center => "Center",
        }
    }

    /// Fixed cell list of the direction.
    pub const fn cells(self) -> &'static [(u8, u8)] {
        match self {
            Self::North => &[(0, 4), (1, 4), (2, 4), (3, 4)],
            Self::Northeast => &[(0, 8), (1, 7), (2, 6), (3, 5)],
            Self::East => &[(4, 8), (4, 7), (4, 6), (4, 5)],
            Self::Southeast => &[(8, 8), (7, 7), (6, 6), (5, 5)],
            Self::South => &[(8, 4), (7, 4), (6, 4), (5, 4)],
            Self::Southwest => &[(8, 0), (7, 1), (6, 2), (5, 3)],
            Self::West => &[(4, 0), (4, 1), (4, 2), (4, 3)],
            Self::Northwest => &[(0, 0), (1, 1), (2, 2), (3, 3)],
            Self::Center => &[(4, 4)],
        }
    }
}

/// Quality tier of a direction or of the whole chakra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChakraQuality {
    HighlyInauspicious,
    Inauspicious,
    Neutral,
    Good,
    Excellent,
}

/// Assessment of one direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionQuality {
    pub direction: Direction,
    /// Benefic grahas currently in the direction's nakshatras.
    pub benefics: Vec<Graha>,
    /// Malefic grahas currently in the direction's nakshatras.
    pub malefics: Vec<Graha>,
    /// Count of favourable-tara cells in the direction.
    pub favourable_taras: u8,
    /// Count of unfavourable-tara cells.
    pub unfavourable_taras: u8,
    pub quality: ChakraQuality,
}

/// The Sarvatobhadra chakra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarvatobhadraChakra {
    /// 0-based janma nakshatra index at the centre.
    pub janma_nakshatra_index: u8,
    /// Grid of 0-based nakshatra indices.
    pub grid: [[u8; 9]; 9],
    /// Cell of each graha, placed by its current nakshatra (first matching
    /// cell in spiral order).
    pub graha_cells: [(u8, u8); 9],
}

/// Build the chakra grid from the janma nakshatra and place the grahas by
/// their current nakshatra indices.
pub fn build_chakra(
    janma_nakshatra_index: u8,
    graha_nakshatra_indices: &[u8; 9],
) -> SarvatobhadraChakra {
    let mut grid = [[0u8; 9]; 9];
    for (i, &(row, col)) in SPIRAL.iter().enumerate() {
        grid[row as usize][col as usize] =
            ((u16::from(janma_nakshatra_index) + i as u16) % 27) as u8;
    }

    let graha_cells = core::array::from_fn(|g| {
        let nak = graha_nakshatra_indices[g];
        SPIRAL
            .iter()
            .copied()
            .find(|&(r, c)| grid[r as usize][c as usize] == nak)
            .unwrap_or((4, 4))
    });

    SarvatobhadraChakra {
        janma_nakshatra_index,
        grid,
        graha_cells,
    }
}

impl SarvatobhadraChakra {
    /// Nakshatra index in a cell.
    pub fn cell(&self, row: u8, col: u8) -> Option<u8> {
        self.grid
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Grahas whose cell lies in the given direction.
    pub fn grahas_in_direction(&self, direction: Direction) -> Vec<Graha> {
        crate::graha::ALL_GRAHAS
            .iter()
            .copied()
            .filter(|g| {
                let cell = self.graha_cells[g.index() as usize];
                direction.cells().contains(&cell)
            })
            .collect()
    }

    /// Assess one direction: occupants by nature plus the tara standing of
    /// its nakshatras.
    pub fn direction_quality(&self, direction: Direction) -> DirectionQuality {
        let occupants = self.grahas_in_direction(direction);
        let benefics: Vec<Graha> = occupants
            .iter()
            .copied()
            .filter(|g| g.natural_nature() == GrahaNature::Benefic)
            .collect();
        let malefics: Vec<Graha> = occupants
            .iter()
            .copied()
            .filter(|g| g.natural_nature() == GrahaNature::Malefic)
            .collect();

        let mut favourable_taras = 0u8;
        let mut unfavourable_taras = 0u8;
        for &(r, c) in direction.cells() {
            let nak = self.grid[r as usize][c as usize];
            let tara = tara_of(self.janma_nakshatra_index, nak);
            if tara.is_favourable() {
                favourable_taras += 1;
            } else if tara.is_unfavourable() {
                unfavourable_taras += 1;
            }
        }

        let score = i16::from(favourable_taras) - i16::from(unfavourable_taras)
            + 2 * (benefics.len() as i16 - malefics.len() as i16);
        let quality = match score {
            4.. => ChakraQuality::Excellent,
            2..=3 => ChakraQuality::Good,
            -1..=1 => ChakraQuality::Neutral,
            -3..=-2 => ChakraQuality::Inauspicious,
            _ => ChakraQuality::HighlyInauspicious,
        };

        DirectionQuality {
            direction,
            benefics,
            malefics,
            favourable_taras,
            unfavourable_taras,
            quality,
        }
    }

    /// Overall chakra score, 0..100: the mean of per-direction qualities
    /// blended with the current-tara category.
    pub fn chakra_score(&self, current_tara: Tara) -> f64 {
        let dir_sum: f64 = ALL_DIRECTIONS
            .iter()
            .map(|&d| match self.direction_quality(d).quality {
                ChakraQuality::Excellent => 100.0,
                ChakraQuality::Good => 75.0,
                ChakraQuality::Neutral => 50.0,
                ChakraQuality::Inauspicious => 25.0,
                ChakraQuality::HighlyInauspicious => 0.0,
            })
            .sum();
        let dir_score = dir_sum / ALL_DIRECTIONS.len() as f64;
        let tara_score = if current_tara.is_favourable() {
            100.0
        } else if current_tara.is_unfavourable() {
            0.0
        } else {
            50.0
        };
        (dir_score * 0.6 + tara_score * 0.4).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spiral_covers_all_81_cells() {
        let mut seen = [[false; 9]; 9];
        for &(r, c) in &SPIRAL {
            assert!(!seen[r as usize][c as usize], "duplicate cell ({r},{c})");
            seen[r as usize][c as usize] = true;
        }
    }

    #[test]
    fn centre_holds_janma() {
        let chakra = build_chakra(7, &[0; 9]);
        assert_eq!(chakra.cell(4, 4), Some(7));
    }

    #[test]
    fn spiral_increments_mod_27() {
        let chakra = build_chakra(25, &[0; 9]);
        // Second spiral cell is (4,5) = janma + 1 = 26; third (3,5) = 0
        assert_eq!(chakra.cell(4, 5), Some(26));
        assert_eq!(chakra.cell(3, 5), Some(0));
        // Last spiral cell (8,8) = janma + 80 mod 27
        assert_eq!(chakra.cell(8, 8), Some((25 + 80) % 27));
    }

    #[test]
    fn each_nakshatra_appears_thrice() {
        let chakra = build_chakra(0, &[0; 9]);
        let mut counts = [0u8; 27];
        for row in &chakra.grid {
            for &n in row {
                counts[n as usize] += 1;
            }
        }
        assert_eq!(counts, [3u8; 27]);
    }

    #[test]
    fn direction_cell_counts() {
        for d in ALL_DIRECTIONS {
            let expected = if d == Direction::Center { 1 } else { 4 };
            assert_eq!(d.cells().len(), expected, "{:?}", d);
        }
    }

    #[test]
    fn graha_placed_in_matching_cell() {
        let mut naks = [0u8; 9];
        naks[Graha::Guru.index() as usize] = 13;
        let chakra = build_chakra(0, &naks);
        let (r, c) = chakra.graha_cells[Graha::Guru.index() as usize];
        assert_eq!(chakra.cell(r, c), Some(13));
    }

    #[test]
    fn direction_quality_counts_taras() {
        let chakra = build_chakra(0, &[0; 9]);
        for d in ALL_DIRECTIONS {
            let q = chakra.direction_quality(d);
            assert!(q.favourable_taras + q.unfavourable_taras <= d.cells().len() as u8);
        }
    }

    #[test]
    fn chakra_score_in_range() {
        let chakra = build_chakra(4, &[0, 3, 6, 9, 12, 15, 18, 21, 24]);
        for t in crate::tara::ALL_TARAS {
            let s = chakra.chakra_score(t);
            assert!((0.0..=100.0).contains(&s));
        }
    }

    #[test]
    fn favourable_tara_raises_score() {
        let chakra = build_chakra(4, &[0, 3, 6, 9, 12, 15, 18, 21, 24]);
        assert!(chakra.chakra_score(Tara::Sampat) > chakra.chakra_score(Tara::Vadha));
    }
}
