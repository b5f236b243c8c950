//! Tournament selection.
//!
//! Parents are chosen by drawing `k` candidates uniformly **with
//! replacement** from the population and keeping the one with the fewest
//! conflicts. Higher `k` means stronger selection pressure; `k = 1` is a
//! uniform random pick.

use crate::board::Candidate;
use crate::fitness::conflicts;
use rand::Rng;

/// Winner of a tournament over an already-drawn participant list.
///
/// Returns the participant with the minimum conflict count; ties go to the
/// first occurrence in input order. Participants are not modified.
///
/// # Panics
/// Panics if `participants` is empty.
pub fn tournament(participants: &[Candidate]) -> &Candidate {
    assert!(
        !participants.is_empty(),
        "cannot select from empty tournament"
    );
    participants
        .iter()
        .min_by_key(|c| conflicts(c))
        .expect("participants is non-empty")
}

/// Draws `k` candidates uniformly with replacement and returns the winner
/// among them, in draw order.
///
/// Strict `<` on the running minimum keeps the earliest-drawn candidate on
/// ties, matching [`tournament`] semantics.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parent<'a, R: Rng>(
    population: &'a [Candidate],
    k: usize,
    rng: &mut R,
) -> &'a Candidate {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best = &population[rng.random_range(0..n)];
    let mut best_conflicts = conflicts(best);
    for _ in 1..k {
        let challenger = &population[rng.random_range(0..n)];
        let challenger_conflicts = conflicts(challenger);
        if challenger_conflicts < best_conflicts {
            best = challenger;
            best_conflicts = challenger_conflicts;
        }
    }
    best
}
