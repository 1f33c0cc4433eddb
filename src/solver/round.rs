//! Round state machine
//!
//! A round owns its candidate set exclusively. Each observation consumes one
//! guess/outcome pair and moves the round to its next state.

use super::filter::filter_candidates;
use crate::core::{CandidateSet, Outcome, Vocabulary, WordIndex};
use crate::error::{EngineError, Result};
use crate::table::OutcomeTable;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// More observations are needed
    Active,
    /// The answer is known
    ///
    /// `confirmed` is true when the last outcome was all-exact. Otherwise a
    /// single candidate is left and guessing it is the final move.
    Solved { answer: WordIndex, confirmed: bool },
    /// No candidate is consistent with the observations
    Exhausted,
    /// The guess limit was reached without solving
    GivenUp,
}

impl RoundState {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// True for every terminal state
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One guess and what it did to the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: WordIndex,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game against one hidden answer
#[derive(Debug, Clone)]
pub struct Round {
    candidates: CandidateSet,
    history: Vec<Turn>,
    state: RoundState,
    max_guesses: usize,
}

impl Round {
    /// Start a round with every vocabulary word as a candidate
    #[must_use]
    pub fn new(vocab: &Vocabulary, max_guesses: usize) -> Self {
        Self::start(CandidateSet::full(vocab), max_guesses)
    }

    /// Start a round from an explicit candidate set
    ///
    /// An empty set starts out exhausted.
    ///
    /// # Errors
    /// Returns `UnknownIndex` if a candidate is outside `vocab`.
    pub fn with_candidates(
        vocab: &Vocabulary,
        candidates: CandidateSet,
        max_guesses: usize,
    ) -> Result<Self> {
        if let Some(&largest) = candidates.as_slice().last() {
            vocab.word(largest)?;
        }
        Ok(Self::start(candidates, max_guesses))
    }

    fn start(candidates: CandidateSet, max_guesses: usize) -> Self {
        let state = if candidates.is_empty() {
            RoundState::Exhausted
        } else {
            RoundState::Active
        };
        Self {
            candidates,
            history: Vec::new(),
            state,
            max_guesses,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Guesses needed to finish, counting the final guess of an unconfirmed solve
    ///
    /// `None` unless the round is solved.
    #[must_use]
    pub fn total_guesses(&self) -> Option<usize> {
        match self.state {
            RoundState::Solved { confirmed: true, .. } => Some(self.guesses_made()),
            RoundState::Solved { confirmed: false, .. } => Some(self.guesses_made() + 1),
            _ => None,
        }
    }

    /// Apply one observed outcome for `guess`
    ///
    /// Transitions:
    /// - all-exact outcome: `Solved { confirmed: true }`
    /// - one candidate left with a guess to spare: `Solved { confirmed: false }`
    /// - guess limit reached: `GivenUp`
    /// - otherwise: `Active`
    ///
    /// # Errors
    /// - `RoundOver` if the round already ended
    /// - `UnknownIndex` if `guess` or a candidate is not in the table; the round
    ///   is unchanged
    /// - `ExhaustedCandidates` if nothing survives; the round becomes `Exhausted`
    pub fn observe(
        &mut self,
        table: &OutcomeTable,
        guess: WordIndex,
        outcome: Outcome,
    ) -> Result<RoundState> {
        if self.state.is_over() {
            return Err(EngineError::RoundOver);
        }
        table.check_index(guess)?;
        table.check_candidates(&self.candidates)?;

        let before = self.candidates.len();
        let filtered = filter_candidates(table, guess, outcome, &self.candidates);

        let remaining = match filtered {
            Ok(remaining) => remaining,
            Err(err) => {
                self.history.push(Turn {
                    guess,
                    outcome,
                    candidates_before: before,
                    candidates_after: 0,
                });
                self.candidates = CandidateSet::default();
                self.state = RoundState::Exhausted;
                return Err(err);
            }
        };

        self.history.push(Turn {
            guess,
            outcome,
            candidates_before: before,
            candidates_after: remaining.len(),
        });
        self.candidates = remaining;

        let made = self.history.len();
        self.state = if outcome.is_perfect(table.word_len()) {
            RoundState::Solved {
                answer: guess,
                confirmed: true,
            }
        } else if let Some(answer) = self.candidates.single().filter(|_| made < self.max_guesses) {
            RoundState::Solved {
                answer,
                confirmed: false,
            }
        } else if made >= self.max_guesses {
            RoundState::GivenUp
        } else {
            RoundState::Active
        };

        Ok(self.state)
    }
}
