//! Word analysis command
//!
//! Scores one guess against the full candidate set and places it among the
//! solver's guess pool.

use crate::core::CandidateSet;
use crate::error::Result;
use crate::solver::entropy::{calculate_metrics, rank_guesses};
use crate::solver::{Solver, Strategy};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// 1-based position among the guess pool by entropy; `None` if not in the pool
    pub rank: Option<usize>,
    pub pool_size: usize,
    /// Highest-entropy guess and its score
    pub best: Option<(String, f64)>,
}

/// Analyze the entropy of a word against every possible answer
///
/// # Errors
///
/// Returns `UnknownWord` if the word is not in the solver's vocabulary.
pub fn analyze_word<S: Strategy>(word: &str, solver: &Solver<S>) -> Result<AnalysisResult> {
    let vocab = solver.vocabulary();
    let table = solver.table();
    let guess = vocab.index_of(word)?;
    let candidates = CandidateSet::full(vocab);

    let metrics = calculate_metrics(table, guess, &candidates);
    let ranked = rank_guesses(table, solver.guess_pool(), &candidates);

    let rank = ranked.iter().position(|&(g, _)| g == guess).map(|p| p + 1);
    let best = match ranked.first() {
        Some(&(g, score)) => Some((vocab.word(g)?.text().to_string(), score)),
        None => None,
    };

    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        word: vocab.word(guess)?.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        rank,
        pool_size: solver.guess_pool().len(),
        best,
    })
}
