//! Two-step entropy lookahead
//!
//! Scores a guess by the information it yields now plus the expected
//! information of the best follow-up guess in each resulting candidate group.
//! Only one extra ply is searched, and only for the strongest one-step guesses.

use super::entropy::{by_score_then_position, calculate_entropy, entropy_of_counts, rank_positions};
use super::filter::partition;
use crate::core::{CandidateSet, WordIndex};
use crate::table::OutcomeTable;
use rayon::prelude::*;

/// Number of top one-step guesses that get the extra ply by default
pub const DEFAULT_SHORTLIST: usize = 10;

/// Expected information in bits over two guesses, the second chosen greedily
///
/// `H(g) + Σ_o p_o · max_{g2} H(g2 | candidates_o)`
#[must_use]
pub fn two_step_entropy(
    table: &OutcomeTable,
    guess: WordIndex,
    guess_pool: &[WordIndex],
    candidates: &CandidateSet,
) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;
    let groups = partition(table, guess, candidates);

    let first = entropy_of_counts(groups.iter().map(|(_, g)| g.len()));

    let follow_up: f64 = groups
        .iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(_, group)| {
            let best = guess_pool
                .iter()
                .map(|&next| calculate_entropy(table, next, group))
                .fold(0.0, f64::max);
            group.len() as f64 / total * best
        })
        .sum();

    first + follow_up
}

/// Select the guess with the highest two-step entropy
///
/// The `shortlist` best one-step guesses are rescored with lookahead; the
/// follow-up ply searches the whole pool. Ties go to the guess that comes
/// first in `guess_pool`, as in the one-step ranker. With a single candidate
/// left, that candidate is returned.
#[must_use]
pub fn select_best_guess(
    table: &OutcomeTable,
    guess_pool: &[WordIndex],
    candidates: &CandidateSet,
    shortlist: usize,
) -> Option<(WordIndex, f64)> {
    if let Some(only) = candidates.single() {
        return Some((only, 0.0));
    }

    let mut ranked = rank_positions(table, guess_pool, candidates);
    ranked.truncate(shortlist.max(1));

    ranked
        .par_iter()
        .map(|&(position, _)| {
            let score = two_step_entropy(table, guess_pool[position], guess_pool, candidates);
            (position, score)
        })
        .max_by(by_score_then_position)
        .map(|(position, score)| (guess_pool[position], score))
}
