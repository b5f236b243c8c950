//! Variation operators: one-point crossover and single-gene mutation.
//!
//! Both operators construct fresh candidates by value; parents are never
//! modified in place.

use crate::board::{Candidate, BOARD_SIZE};
use rand::Rng;

/// One-point crossover at `index` in `0..=8`.
///
/// The first child takes `parent1`'s rows before `index` and `parent2`'s
/// from `index` onward; the second child is the mirror image. `index == 0`
/// yields `(parent2, parent1)` and `index == 8` yields `(parent1, parent2)`.
///
/// # Panics
/// Panics if `index > 8`.
pub fn one_point_crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    index: usize,
) -> (Candidate, Candidate) {
    assert!(index <= BOARD_SIZE, "crossover index must be in 0..=8");

    let mut a = *parent1.rows();
    let mut b = *parent2.rows();
    a[index..].copy_from_slice(&parent2.rows()[index..]);
    b[index..].copy_from_slice(&parent1.rows()[index..]);

    (Candidate::new(a), Candidate::new(b))
}

/// Returns a copy of `candidate`, mutated with probability `m`.
///
/// One Bernoulli trial per call: a uniform draw in `[0, 1)` is compared
/// against `m`. On a hit, one of the 8 positions is chosen uniformly and its
/// row replaced with a uniform draw from `1..=8` — the new value may equal
/// the old one, so a hit is not guaranteed to change the board.
///
/// `m` outside `[0, 1]` is not validated; the comparison degenerates to the
/// trial never (`m <= 0`) or always (`m >= 1`) firing.
pub fn mutate<R: Rng>(candidate: &Candidate, m: f64, rng: &mut R) -> Candidate {
    let mut child = *candidate;
    if rng.random::<f64>() < m {
        let i = rng.random_range(0..BOARD_SIZE);
        child.rows_mut()[i] = rng.random_range(1..=BOARD_SIZE as u8);
    }
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_crossover_known_case() {
        let p1 = Candidate::new([2, 4, 7, 4, 8, 5, 5, 2]);
        let p2 = Candidate::new([3, 2, 7, 5, 2, 4, 1, 1]);

        let (a, b) = one_point_crossover(&p1, &p2, 3);

        assert_eq!(a, Candidate::new([2, 4, 7, 5, 2, 4, 1, 1]));
        assert_eq!(b, Candidate::new([3, 2, 7, 4, 8, 5, 5, 2]));
    }

    #[test]
    fn test_crossover_index_zero_swaps_parents() {
        let p1 = Candidate::new([2, 4, 7, 4, 8, 5, 5, 2]);
        let p2 = Candidate::new([3, 2, 7, 5, 2, 4, 1, 1]);

        let (a, b) = one_point_crossover(&p1, &p2, 0);
        assert_eq!(a, p2);
        assert_eq!(b, p1);
    }

    #[test]
    fn test_crossover_index_eight_returns_parents() {
        let p1 = Candidate::new([2, 4, 7, 4, 8, 5, 5, 2]);
        let p2 = Candidate::new([3, 2, 7, 5, 2, 4, 1, 1]);

        let (a, b) = one_point_crossover(&p1, &p2, 8);
        assert_eq!(a, p1);
        assert_eq!(b, p2);
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let p1 = Candidate::new([2, 4, 7, 4, 8, 5, 5, 2]);
        let p2 = Candidate::new([3, 2, 7, 5, 2, 4, 1, 1]);
        let (p1_before, p2_before) = (p1, p2);

        let _ = one_point_crossover(&p1, &p2, 4);

        assert_eq!(p1, p1_before);
        assert_eq!(p2, p2_before);
    }

    #[test]
    #[should_panic(expected = "crossover index must be in 0..=8")]
    fn test_crossover_index_out_of_range_panics() {
        let p = Candidate::new([1; 8]);
        one_point_crossover(&p, &p, 9);
    }

    #[test]
    fn test_mutate_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = Candidate::new([2, 2, 4, 8, 1, 6, 3, 4]);
        for _ in 0..1000 {
            assert_eq!(mutate(&c, 0.0, &mut rng), c);
        }
    }

    #[test]
    fn test_mutate_full_rate_changes_at_most_one_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = Candidate::new([2, 2, 4, 8, 1, 6, 3, 4]);
        for _ in 0..1000 {
            let mutated = mutate(&c, 1.0, &mut rng);
            let changed = c
                .rows()
                .iter()
                .zip(mutated.rows())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1, "expected at most one changed position");
        }
    }

    #[test]
    fn test_mutate_full_rate_eventually_changes_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = Candidate::new([2, 2, 4, 8, 1, 6, 3, 4]);
        let changed = (0..100).any(|_| mutate(&c, 1.0, &mut rng) != c);
        assert!(changed, "mutation at m=1 should alter the board eventually");
    }

    proptest! {
        #[test]
        fn prop_crossover_partitions_parent_material(
            p1 in proptest::array::uniform8(1u8..=8),
            p2 in proptest::array::uniform8(1u8..=8),
            index in 0usize..=8,
        ) {
            let parent1 = Candidate::new(p1);
            let parent2 = Candidate::new(p2);
            let (a, b) = one_point_crossover(&parent1, &parent2, index);

            // Recombining the opposite way reconstructs both parents.
            let (back1, back2) = one_point_crossover(&a, &b, index);
            prop_assert_eq!(back1, parent1);
            prop_assert_eq!(back2, parent2);
        }

        #[test]
        fn prop_mutate_preserves_length_and_range(
            rows in proptest::array::uniform8(1u8..=8),
            m in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutated = mutate(&Candidate::new(rows), m, &mut rng);
            prop_assert_eq!(mutated.rows().len(), 8);
            prop_assert!(mutated.rows().iter().all(|r| (1..=8).contains(r)));
        }
    }
}
