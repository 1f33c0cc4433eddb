//! Shannon entropy calculation over outcome-table rows
//!
//! Given a guess and a candidate set, computes the expected information gain.

use crate::core::{CandidateSet, Outcome, WordIndex};
use crate::table::OutcomeTable;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, assuming the answer is
/// uniformly distributed over `candidates`.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing outcome x.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{CandidateSet, Vocabulary};
/// use wordle_entropy::solver::entropy::calculate_entropy;
/// use wordle_entropy::table::OutcomeTable;
///
/// let vocab = Vocabulary::from_strs(["slate", "zzzzz"]).unwrap();
/// let table = OutcomeTable::build(&vocab);
/// let candidates = CandidateSet::full(&vocab);
///
/// // Perfect binary split = 1 bit
/// let entropy = calculate_entropy(&table, 0, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(table: &OutcomeTable, guess: WordIndex, candidates: &CandidateSet) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_outcome(table, guess, candidates))
}

/// Count candidates per outcome of `guess`
///
/// The counts always sum to `candidates.len()`.
#[must_use]
pub fn group_by_outcome(
    table: &OutcomeTable,
    guess: WordIndex,
    candidates: &CandidateSet,
) -> FxHashMap<Outcome, usize> {
    let row = table.row(guess);
    let mut counts = FxHashMap::default();

    for answer in candidates.iter() {
        *counts.entry(Outcome::new(row[answer])).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from an outcome distribution
///
/// H = -Σ p * log₂(p)
///
/// Counts are summed in sorted order, so equal distributions give bit-identical
/// results whatever outcomes they are keyed by.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one outcome with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n outcomes
///
/// # Examples
/// ```
/// use wordle_entropy::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_entropy::core::Outcome;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Outcome::new(0), 25);
/// uniform.insert(Outcome::new(1), 25);
/// uniform.insert(Outcome::new(2), 25);
/// uniform.insert(Outcome::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(outcome_counts: &std::collections::HashMap<Outcome, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    entropy_of_counts(outcome_counts.values().copied())
}

/// Shannon entropy of a list of group sizes
#[must_use]
pub fn entropy_of_counts(counts: impl IntoIterator<Item = usize>) -> f64 {
    let mut counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(
    table: &OutcomeTable,
    guess: WordIndex,
    candidates: &CandidateSet,
) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_outcome(table, guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = groups.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    fn setup(words: &[&str]) -> (Vocabulary, OutcomeTable) {
        let vocab = Vocabulary::from_strs(words).unwrap();
        let table = OutcomeTable::build(&vocab);
        (vocab, table)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 outcomes, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Outcome::new(0), 1);
        counts.insert(Outcome::new(1), 1);
        counts.insert(Outcome::new(2), 1);
        counts.insert(Outcome::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Outcome::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = entropy_of_counts([25, 25, 25, 25]);
        let skewed = entropy_of_counts([97, 1, 1, 1]);
        assert!(uniform > skewed);
    }

    #[test]
    fn entropy_ignores_key_order() {
        let a = entropy_of_counts([3, 1, 7, 2]);
        let b = entropy_of_counts([7, 2, 3, 1]);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Outcome, usize> = FxHashMap::default();
        assert!((shannon_entropy(&counts) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn groups_partition_candidates() {
        let (vocab, table) = setup(&["crane", "slate", "irate", "trace", "raise", "crate"]);
        let candidates = CandidateSet::full(&vocab);

        for guess in vocab.indices() {
            let groups = group_by_outcome(&table, guess, &candidates);
            assert_eq!(groups.values().sum::<usize>(), candidates.len());
        }
    }

    #[test]
    fn calculate_entropy_all_same_outcome() {
        let (vocab, table) = setup(&["zzzzz", "aaaaa", "bbbbb", "ccccc"]);
        let candidates = CandidateSet::from_indices(vec![1, 2, 3]);

        // All answers give the all-absent outcome for ZZZZZ
        let entropy = calculate_entropy(&table, vocab.index_of("zzzzz").unwrap(), &candidates);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let (_, table) = setup(&["crane", "slate"]);
        let entropy = calculate_entropy(&table, 0, &CandidateSet::default());
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_are_consistent() {
        let (vocab, table) = setup(&["crane", "slate", "irate", "trace", "raise", "crate"]);
        let candidates = CandidateSet::full(&vocab);
        let metrics = calculate_metrics(&table, 0, &candidates);

        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= (candidates.len() as f64).log2() + 1e-9);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.max_partition <= candidates.len());
    }
}
