//! Word solving command
//!
//! Self-plays one round against a known answer and records every step.

use crate::core::{Outcome, WordIndex};
use crate::error::Result;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{RoundState, Solver, Strategy};

/// Result of solving a word
pub struct SolveResult {
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub word_len: usize,
    pub final_state: RoundState,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word using the given solver and strategy
///
/// When the round ends with a single candidate identified, the closing guess
/// of that candidate is included in the trace.
///
/// # Errors
///
/// Returns `UnknownWord` if the target is not in the solver's vocabulary, or
/// any error raised while guessing.
pub fn solve_word<S: Strategy>(target: &str, solver: &Solver<S>) -> Result<SolveResult> {
    let vocab = solver.vocabulary();
    let table = solver.table();
    let answer = vocab.index_of(target)?;

    let mut round = solver.new_round();
    let mut guesses = Vec::new();

    while !round.state().is_over() {
        let candidates_before = round.candidates().len();
        let guess = solver.next_guess(round.candidates())?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(table, guess, round.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let outcome = table.outcome(guess, answer);
        round.observe(table, guess, outcome)?;

        guesses.push(GuessStep {
            word: word_text(solver, guess)?,
            outcome,
            candidates_before,
            candidates_after: round.candidates().len(),
            entropy,
            expected_remaining,
        });
    }

    let final_state = round.state();
    if let RoundState::Solved {
        answer: found,
        confirmed: false,
    } = final_state
    {
        guesses.push(GuessStep {
            word: word_text(solver, found)?,
            outcome: Outcome::perfect(vocab.word_len()),
            candidates_before: 1,
            candidates_after: 1,
            entropy: None,
            expected_remaining: None,
        });
    }

    Ok(SolveResult {
        guesses,
        target: vocab.word(answer)?.text().to_string(),
        word_len: vocab.word_len(),
        final_state,
    })
}

fn word_text<S: Strategy>(solver: &Solver<S>, index: WordIndex) -> Result<String> {
    Ok(solver.vocabulary().word(index)?.text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::error::EngineError;
    use crate::solver::EntropyStrategy;
    use crate::table::OutcomeTable;
    use crate::wordlists::WORDS;
    use std::sync::Arc;

    fn solver(words: &[&str]) -> Solver<EntropyStrategy> {
        let vocab = Arc::new(Vocabulary::from_strs(words).unwrap());
        let table = Arc::new(OutcomeTable::build(&vocab));
        Solver::new(EntropyStrategy, vocab, table).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let solver = solver(&WORDS[..100]);
        let result = solve_word(WORDS[0], &solver).unwrap();

        assert!(result.final_state.is_solved());
        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= 6);

        let last = result.guesses.last().unwrap();
        assert_eq!(last.word, WORDS[0]);
        assert!(last.outcome.is_perfect(5));
    }

    #[test]
    fn solve_records_history() {
        let solver = solver(&WORDS[..100]);
        let result = solve_word(WORDS[42], &solver).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert!(result.guesses[0].entropy.is_some());
    }

    #[test]
    fn unknown_target_returns_error() {
        let solver = solver(&WORDS[..100]);
        assert!(matches!(
            solve_word("zzzzz", &solver),
            Err(EngineError::UnknownWord(_))
        ));
    }

    #[test]
    fn respects_guess_limit() {
        let solver = solver(&WORDS[..100]).with_max_guesses(1);
        let target = WORDS[99];
        let result = solve_word(target, &solver).unwrap();

        assert_eq!(result.guesses.len(), 1);
        assert!(matches!(
            result.final_state,
            RoundState::Solved { confirmed: true, .. } | RoundState::GivenUp
        ));
    }
}
