//! Pure entropy-based word selection
//!
//! Selects the guess that maximizes Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::{CandidateSet, WordIndex};
use crate::table::OutcomeTable;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Order scored guesses by score, then by earliest pool position
///
/// Positions are unique, so no two entries compare equal and parallel
/// reductions always agree.
pub(crate) fn by_score_then_position(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0))
}

/// Select best guess by maximizing entropy
///
/// Returns the winning guess and its entropy, or `None` if the guess pool is
/// empty. Ties go to the guess that comes first in `guess_pool`. With a single
/// candidate left, that candidate is returned.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{CandidateSet, Vocabulary};
/// use wordle_entropy::solver::entropy::select_best_guess;
/// use wordle_entropy::table::OutcomeTable;
///
/// let vocab = Vocabulary::from_strs(["aaaaa", "aeros", "slate", "irate"]).unwrap();
/// let table = OutcomeTable::build(&vocab);
/// let candidates = CandidateSet::from_indices(vec![2, 3]);
///
/// let (best, entropy) = select_best_guess(&table, &[0, 1], &candidates).unwrap();
/// assert_eq!(best, 1); // AEROS splits SLATE/IRATE, AAAAA does not
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(
    table: &OutcomeTable,
    guess_pool: &[WordIndex],
    candidates: &CandidateSet,
) -> Option<(WordIndex, f64)> {
    if let Some(only) = candidates.single() {
        return Some((only, 0.0));
    }

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(position, &guess)| (position, calculate_entropy(table, guess, candidates)))
        .max_by(by_score_then_position)
        .map(|(position, entropy)| (guess_pool[position], entropy))
}

/// Score every guess in the pool, best first
///
/// Sorted by descending entropy, ties by pool position.
#[must_use]
pub fn rank_guesses(
    table: &OutcomeTable,
    guess_pool: &[WordIndex],
    candidates: &CandidateSet,
) -> Vec<(WordIndex, f64)> {
    rank_positions(table, guess_pool, candidates)
        .into_iter()
        .map(|(position, entropy)| (guess_pool[position], entropy))
        .collect()
}

/// Like [`rank_guesses`], keyed by position in `guess_pool`
pub(crate) fn rank_positions(
    table: &OutcomeTable,
    guess_pool: &[WordIndex],
    candidates: &CandidateSet,
) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = guess_pool
        .par_iter()
        .enumerate()
        .map(|(position, &guess)| (position, calculate_entropy(table, guess, candidates)))
        .collect();

    scored.sort_by(|a, b| by_score_then_position(b, a));
    scored
}
