//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for outcome distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropy_of_counts, group_by_outcome,
    shannon_entropy,
};
pub(crate) use selector::{by_score_then_position, rank_positions};
pub use selector::{rank_guesses, select_best_guess};
