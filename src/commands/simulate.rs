//! Batch self-play simulation
//!
//! Plays independent rounds against known answers in parallel and summarizes
//! solver quality. Each round owns its candidate set; the solver is shared.

use crate::core::WordIndex;
use crate::error::Result;
use crate::solver::{RoundState, Solver, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of self-playing one answer
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub answer: WordIndex,
    pub state: RoundState,
    /// Guesses needed, counting the closing guess; `None` if unsolved
    pub guesses: Option<usize>,
}

/// Summary of a simulation run
#[derive(Debug)]
pub struct SimulationStats {
    pub strategy: String,
    pub rounds: usize,
    pub solved: usize,
    pub given_up: usize,
    pub exhausted: usize,
    /// Solved rounds keyed by guess count
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    /// Slowest solves, most guesses first
    pub hardest: Vec<(String, usize)>,
    /// Words that were not solved
    pub failures: Vec<String>,
}

impl SimulationStats {
    #[must_use]
    pub fn solved_percent(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.solved as f64 / self.rounds as f64 * 100.0
        }
    }

    #[must_use]
    pub fn time_per_round(&self) -> Duration {
        u32::try_from(self.rounds)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_time / n)
    }
}

/// Pick `rounds` answers uniformly at random, with replacement
///
/// A seed makes the draw reproducible.
#[must_use]
pub fn pick_targets(vocab_len: usize, rounds: usize, seed: Option<u64>) -> Vec<WordIndex> {
    if vocab_len == 0 {
        return Vec::new();
    }

    match seed {
        Some(seed) => draw(&mut StdRng::seed_from_u64(seed), vocab_len, rounds),
        None => draw(&mut rand::rng(), vocab_len, rounds),
    }
}

fn draw<R: Rng>(rng: &mut R, vocab_len: usize, rounds: usize) -> Vec<WordIndex> {
    (0..rounds).map(|_| rng.random_range(0..vocab_len)).collect()
}

/// Self-play every target in parallel
///
/// `on_round` is called once per finished round, from worker threads.
///
/// # Errors
///
/// Returns the first error raised by any round, such as an unknown target index.
pub fn run_simulation<S, F>(
    solver: &Solver<S>,
    targets: &[WordIndex],
    strategy_name: &str,
    on_round: F,
) -> Result<SimulationStats>
where
    S: Strategy + Sync,
    F: Fn() + Sync,
{
    let start = Instant::now();

    let results = targets
        .par_iter()
        .map(|&answer| {
            let round = solver.play(answer);
            on_round();
            round.map(|round| RoundResult {
                answer,
                state: round.state(),
                guesses: round.total_guesses(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_time = start.elapsed();
    summarize(solver, &results, strategy_name, total_time)
}

fn summarize<S: Strategy>(
    solver: &Solver<S>,
    results: &[RoundResult],
    strategy_name: &str,
    total_time: Duration,
) -> Result<SimulationStats> {
    let vocab = solver.vocabulary();

    let mut distribution = BTreeMap::new();
    let mut given_up = 0;
    let mut exhausted = 0;
    let mut hardest = Vec::new();
    let mut failures = Vec::new();

    for result in results {
        let text = vocab.word(result.answer)?.text().to_string();
        match (result.state, result.guesses) {
            (RoundState::Solved { .. }, Some(guesses)) => {
                *distribution.entry(guesses).or_insert(0) += 1;
                hardest.push((text, guesses));
            }
            (RoundState::Exhausted, _) => {
                exhausted += 1;
                failures.push(text);
            }
            _ => {
                given_up += 1;
                failures.push(text);
            }
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.dedup();
    hardest.truncate(5);
    failures.sort();
    failures.dedup();

    Ok(SimulationStats {
        strategy: strategy_name.to_string(),
        rounds: results.len(),
        solved,
        given_up,
        exhausted,
        distribution,
        average_guesses,
        total_time,
        hardest,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::solver::StrategyType;
    use crate::table::OutcomeTable;
    use crate::wordlists::WORDS;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn solver() -> Solver {
        let vocab = Arc::new(Vocabulary::from_strs(&WORDS[..120]).unwrap());
        let table = Arc::new(OutcomeTable::build(&vocab));
        Solver::new(StrategyType::default(), vocab, table).unwrap()
    }

    #[test]
    fn seeded_targets_are_reproducible() {
        let a = pick_targets(100, 20, Some(7));
        let b = pick_targets(100, 20, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.iter().all(|&t| t < 100));
    }

    #[test]
    fn no_targets_from_empty_vocabulary() {
        assert!(pick_targets(0, 5, None).is_empty());
    }

    #[test]
    fn simulates_every_word() {
        let solver = solver();
        let targets: Vec<_> = solver.vocabulary().indices().collect();
        let ticks = AtomicUsize::new(0);

        let stats = run_simulation(&solver, &targets, "one-step", || {
            ticks.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(ticks.load(Ordering::Relaxed), targets.len());
        assert_eq!(stats.rounds, targets.len());
        assert_eq!(stats.solved + stats.given_up + stats.exhausted, stats.rounds);
        assert_eq!(stats.exhausted, 0);
        assert_eq!(stats.solved, stats.rounds);
        assert!(stats.average_guesses >= 1.0);
        assert!(stats.distribution.keys().all(|&g| (1..=6).contains(&g)));
        assert!((stats.solved_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_target_fails() {
        let solver = solver();
        assert!(run_simulation(&solver, &[10_000], "one-step", || {}).is_err());
    }

    #[test]
    fn empty_run_has_zero_stats() {
        let solver = solver();
        let stats = run_simulation(&solver, &[], "one-step", || {}).unwrap();
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.time_per_round(), Duration::ZERO);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
