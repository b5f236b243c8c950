//! Fitness evaluation: counting attacking queen pairs.
//!
//! Fitness is minimized — 0 conflicts is a solved board. The count ranges
//! over the 28 unordered pairs of distinct columns.

use crate::board::{attacks, Candidate};

/// Upper bound on [`conflicts`]: every one of the C(8,2) pairs attacking.
pub const MAX_CONFLICTS: u32 = 28;

/// Number of attacking queen pairs in `candidate`.
///
/// Deterministic and pure. For example,
/// `conflicts(&[2, 2, 4, 8, 1, 6, 3, 4].into())` is 9.
pub fn conflicts(candidate: &Candidate) -> u32 {
    let rows = candidate.rows();
    let mut count = 0;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if attacks((i as u8 + 1, rows[i]), (j as u8 + 1, rows[j])) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_board_has_nine_conflicts() {
        assert_eq!(conflicts(&Candidate::new([2, 2, 4, 8, 1, 6, 3, 4])), 9);
    }

    #[test]
    fn test_known_solution_has_zero_conflicts() {
        assert_eq!(conflicts(&Candidate::new([1, 5, 8, 6, 3, 7, 2, 4])), 0);
    }

    #[test]
    fn test_all_queens_on_one_row_is_worst_case() {
        assert_eq!(conflicts(&Candidate::new([4; 8])), MAX_CONFLICTS);
    }

    #[test]
    fn test_single_attacking_pair() {
        // Columns 1 and 2 share row 1; every other pair is clear.
        assert_eq!(conflicts(&Candidate::new([1, 1, 5, 8, 2, 7, 3, 6])), 1);
    }

    proptest! {
        #[test]
        fn prop_conflicts_bounded(rows in proptest::array::uniform8(1u8..=8)) {
            let c = conflicts(&Candidate::new(rows));
            prop_assert!(c <= MAX_CONFLICTS);
        }

        #[test]
        fn prop_duplicate_rows_always_conflict(
            rows in proptest::array::uniform8(1u8..=8)
        ) {
            let distinct: std::collections::HashSet<u8> = rows.iter().copied().collect();
            if distinct.len() < rows.len() {
                prop_assert!(conflicts(&Candidate::new(rows)) >= 1);
            }
        }
    }
}
