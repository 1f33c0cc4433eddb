//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{entropy, two_step};
use crate::core::{CandidateSet, WordIndex};
use crate::table::OutcomeTable;
use std::fmt;
use std::str::FromStr;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the best guess from `guess_pool` given the remaining candidates
    ///
    /// Returns `None` if the guess pool is empty. Must be deterministic for
    /// identical inputs.
    fn select_guess(
        &self,
        table: &OutcomeTable,
        guess_pool: &[WordIndex],
        candidates: &CandidateSet,
    ) -> Option<WordIndex>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Greedy one-step entropy maximization (default)
    OneStep(EntropyStrategy),
    /// One-step entropy plus a single ply of lookahead
    TwoStep(TwoStepStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::OneStep(EntropyStrategy)
    }
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        table: &OutcomeTable,
        guess_pool: &[WordIndex],
        candidates: &CandidateSet,
    ) -> Option<WordIndex> {
        match self {
            Self::OneStep(s) => s.select_guess(table, guess_pool, candidates),
            Self::TwoStep(s) => s.select_guess(table, guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "one-step", "entropy", "two-step", "lookahead".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "one-step" | "entropy" => Some(Self::OneStep(EntropyStrategy)),
            "two-step" | "lookahead" => Some(Self::TwoStep(TwoStepStrategy::default())),
            _ => None,
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OneStep(_) => "one-step",
            Self::TwoStep(_) => "two-step",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("unknown strategy '{s}' (expected one of: one-step, entropy, two-step)")
        })
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(
        &self,
        table: &OutcomeTable,
        guess_pool: &[WordIndex],
        candidates: &CandidateSet,
    ) -> Option<WordIndex> {
        entropy::select_best_guess(table, guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Two-step lookahead strategy
///
/// Rescores the `shortlist` best entropy guesses by the expected information of
/// the best second guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoStepStrategy {
    /// How many one-step leaders get the extra ply
    pub shortlist: usize,
}

impl TwoStepStrategy {
    /// Create a new two-step strategy
    ///
    /// # Parameters
    /// - `shortlist`: Number of top one-step guesses to rescore (minimum 1)
    #[must_use]
    pub const fn new(shortlist: usize) -> Self {
        Self {
            shortlist: if shortlist == 0 { 1 } else { shortlist },
        }
    }
}

impl Default for TwoStepStrategy {
    fn default() -> Self {
        Self::new(two_step::DEFAULT_SHORTLIST)
    }
}

impl Strategy for TwoStepStrategy {
    fn select_guess(
        &self,
        table: &OutcomeTable,
        guess_pool: &[WordIndex],
        candidates: &CandidateSet,
    ) -> Option<WordIndex> {
        two_step::select_best_guess(table, guess_pool, candidates, self.shortlist)
            .map(|(best, _)| best)
    }
}
