//! Board encoding for the 8-queens puzzle.
//!
//! A [`Candidate`] stores one row value per column: position `i` (0-based)
//! is column `i + 1`, the value is the row in `1..=8` occupied by that
//! column's queen. The encoding deliberately permits duplicate rows and
//! attacking placements — fitness is what measures them.

use rand::Rng;
use std::fmt;

/// Board side length and queen count.
pub const BOARD_SIZE: usize = 8;

/// One full board configuration: eight row values indexed by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    rows: [u8; BOARD_SIZE],
}

impl Candidate {
    /// Wraps an explicit row array. Rows must be in `1..=8`.
    pub fn new(rows: [u8; BOARD_SIZE]) -> Self {
        debug_assert!(
            rows.iter().all(|r| (1..=BOARD_SIZE as u8).contains(r)),
            "rows must be in 1..=8: {rows:?}"
        );
        Self { rows }
    }

    /// Creates a candidate with each row drawn independently and uniformly
    /// from `1..=8`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rows = [0u8; BOARD_SIZE];
        for row in rows.iter_mut() {
            *row = rng.random_range(1..=BOARD_SIZE as u8);
        }
        Self { rows }
    }

    /// The row values, indexed by column.
    pub fn rows(&self) -> &[u8; BOARD_SIZE] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [u8; BOARD_SIZE] {
        &mut self.rows
    }

    /// Queen positions as `(column, row)` pairs, columns `1..=8` in order.
    pub fn queens(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, &row)| (i as u8 + 1, row))
    }
}

impl From<[u8; BOARD_SIZE]> for Candidate {
    fn from(rows: [u8; BOARD_SIZE]) -> Self {
        Self::new(rows)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

/// Whether two queens attack each other: same row, same column, or same
/// diagonal (`|Δrow| == |Δcol|`). Symmetric and total over in-range pairs.
pub fn attacks(a: (u8, u8), b: (u8, u8)) -> bool {
    let dc = (a.0 as i16 - b.0 as i16).abs();
    let dr = (a.1 as i16 - b.1 as i16).abs();
    dc == 0 || dr == 0 || dc == dr
}
