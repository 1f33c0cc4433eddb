//! Main solver interface

use super::filter::filter_candidates;
use super::round::Round;
use super::strategy::{Strategy, StrategyType};
use crate::core::{CandidateSet, Outcome, Vocabulary, WordIndex};
use crate::error::{EngineError, Result};
use crate::table::OutcomeTable;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Conventional guess limit of the game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Main solver
///
/// Binds a strategy to one vocabulary and its outcome table. The table and
/// vocabulary are shared read-only, so one solver can drive any number of
/// concurrent rounds.
pub struct Solver<S: Strategy = StrategyType> {
    strategy: S,
    vocab: Arc<Vocabulary>,
    table: Arc<OutcomeTable>,
    guess_pool: Vec<WordIndex>,
    max_guesses: usize,
    opening: OnceLock<Option<WordIndex>>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver whose guess pool is the whole vocabulary
    ///
    /// # Errors
    /// Returns `CacheMismatch` if `table` was not built from `vocab`.
    pub fn new(strategy: S, vocab: Arc<Vocabulary>, table: Arc<OutcomeTable>) -> Result<Self> {
        if !table.matches(&vocab) {
            return Err(EngineError::CacheMismatch {
                path: PathBuf::from("<memory>"),
                reason: format!(
                    "table fingerprint {} (size {}), vocabulary fingerprint {} (size {})",
                    table.fingerprint(),
                    table.size(),
                    vocab.fingerprint(),
                    vocab.len()
                ),
            });
        }

        let guess_pool = vocab.indices().collect();
        Ok(Self {
            strategy,
            vocab,
            table,
            guess_pool,
            max_guesses: DEFAULT_MAX_GUESSES,
            opening: OnceLock::new(),
        })
    }

    /// Restrict the words eligible as guesses
    ///
    /// Order matters: ties are broken by position in this list.
    ///
    /// # Errors
    /// Returns `UnknownIndex` for an index outside the vocabulary.
    pub fn with_guess_pool(mut self, guess_pool: Vec<WordIndex>) -> Result<Self> {
        if let Some(&bad) = guess_pool.iter().find(|&&g| g >= self.vocab.len()) {
            return Err(EngineError::UnknownIndex {
                index: bad,
                size: self.vocab.len(),
            });
        }
        self.guess_pool = guess_pool;
        self.opening = OnceLock::new();
        Ok(self)
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses.max(1);
        self
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    #[must_use]
    pub fn table(&self) -> &OutcomeTable {
        &self.table
    }

    #[must_use]
    pub fn guess_pool(&self) -> &[WordIndex] {
        &self.guess_pool
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Fresh round over the full vocabulary
    #[must_use]
    pub fn new_round(&self) -> Round {
        Round::new(&self.vocab, self.max_guesses)
    }

    /// Best guess for the given candidates
    ///
    /// The opening guess (all words still possible) is computed once and reused.
    ///
    /// # Errors
    /// - `NoCandidates` if `candidates` or the guess pool is empty
    /// - `UnknownIndex` if a candidate is outside the vocabulary
    pub fn next_guess(&self, candidates: &CandidateSet) -> Result<WordIndex> {
        if candidates.is_empty() {
            return Err(EngineError::NoCandidates);
        }
        self.table.check_candidates(candidates)?;

        if candidates.len() == self.vocab.len() {
            return (*self.opening.get_or_init(|| self.select(candidates)))
                .ok_or(EngineError::NoCandidates);
        }

        self.select(candidates).ok_or(EngineError::NoCandidates)
    }

    fn select(&self, candidates: &CandidateSet) -> Option<WordIndex> {
        self.strategy.select_guess(&self.table, &self.guess_pool, candidates)
    }

    /// Narrow `candidates` by one observation
    ///
    /// # Errors
    /// See [`filter_candidates`].
    pub fn filter(
        &self,
        guess: WordIndex,
        outcome: Outcome,
        candidates: &CandidateSet,
    ) -> Result<CandidateSet> {
        filter_candidates(&self.table, guess, outcome, candidates)
    }

    /// Self-play one round against a known answer
    ///
    /// Outcomes come from the table, so the round can only end solved or
    /// given up.
    ///
    /// # Errors
    /// Returns `UnknownIndex` if `answer` is outside the vocabulary, or any
    /// error raised while guessing.
    pub fn play(&self, answer: WordIndex) -> Result<Round> {
        self.vocab.word(answer)?;

        let mut round = self.new_round();
        while !round.state().is_over() {
            let guess = self.next_guess(round.candidates())?;
            let outcome = self.table.outcome(guess, answer);
            round.observe(&self.table, guess, outcome)?;
        }

        Ok(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::round::RoundState;
    use crate::solver::strategy::{EntropyStrategy, TwoStepStrategy};

    fn setup() -> (Arc<Vocabulary>, Arc<OutcomeTable>) {
        let vocab = Arc::new(
            Vocabulary::from_strs([
                "crane", "slate", "irate", "crate", "grate", "trace", "snake", "roast", "beast",
            ])
            .unwrap(),
        );
        let table = Arc::new(OutcomeTable::build(&vocab));
        (vocab, table)
    }

    #[test]
    fn rejects_foreign_table() {
        let (vocab, _) = setup();
        let other = Vocabulary::from_strs(["crane", "slate"]).unwrap();
        let table = Arc::new(OutcomeTable::build(&other));

        assert!(matches!(
            Solver::new(EntropyStrategy, vocab, table),
            Err(EngineError::CacheMismatch { .. })
        ));
    }

    #[test]
    fn solves_every_word() {
        let (vocab, table) = setup();
        for strategy in [
            StrategyType::default(),
            StrategyType::TwoStep(TwoStepStrategy::default()),
        ] {
            let solver = Solver::new(strategy, vocab.clone(), table.clone()).unwrap();
            for answer in vocab.indices() {
                let round = solver.play(answer).unwrap();
                match round.state() {
                    RoundState::Solved { answer: found, .. } => assert_eq!(found, answer),
                    other => panic!("{} ended as {other:?}", vocab.word(answer).unwrap()),
                }
                assert!(round.total_guesses().unwrap() <= DEFAULT_MAX_GUESSES);
            }
        }
    }

    #[test]
    fn opening_guess_is_stable() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab.clone(), table).unwrap();
        let all = CandidateSet::full(&vocab);

        let first = solver.next_guess(&all).unwrap();
        assert_eq!(solver.next_guess(&all).unwrap(), first);
    }

    #[test]
    fn empty_candidates_have_no_guess() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab, table).unwrap();
        assert!(matches!(
            solver.next_guess(&CandidateSet::default()),
            Err(EngineError::NoCandidates)
        ));
    }

    #[test]
    fn out_of_range_candidates_are_rejected() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab.clone(), table).unwrap();
        let stray = CandidateSet::from_indices(vec![0, 99]);

        assert!(matches!(
            solver.next_guess(&stray),
            Err(EngineError::UnknownIndex { index: 99, .. })
        ));
        assert!(matches!(
            solver.filter(0, Outcome::new(0), &stray),
            Err(EngineError::UnknownIndex { index: 99, .. })
        ));
        assert!(solver.next_guess(&CandidateSet::full(&vocab)).is_ok());
    }

    #[test]
    fn guess_pool_is_validated() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab, table).unwrap();
        assert!(matches!(
            solver.with_guess_pool(vec![0, 100]),
            Err(EngineError::UnknownIndex { index: 100, .. })
        ));
    }

    #[test]
    fn restricted_pool_is_respected() {
        let (vocab, table) = setup();
        let slate = vocab.index_of("slate").unwrap();
        let solver = Solver::new(EntropyStrategy, vocab.clone(), table)
            .unwrap()
            .with_guess_pool(vec![slate])
            .unwrap();

        assert_eq!(solver.next_guess(&CandidateSet::full(&vocab)).unwrap(), slate);
    }

    #[test]
    fn play_rejects_unknown_answer() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab, table).unwrap();
        assert!(matches!(
            solver.play(42),
            Err(EngineError::UnknownIndex { index: 42, .. })
        ));
    }

    #[test]
    fn filter_matches_round() {
        let (vocab, table) = setup();
        let solver = Solver::new(EntropyStrategy, vocab.clone(), table.clone()).unwrap();
        let crane = vocab.index_of("crane").unwrap();
        let grate = vocab.index_of("grate").unwrap();
        let outcome = table.outcome(crane, grate);

        let mut round = solver.new_round();
        round.observe(&table, crane, outcome).unwrap();

        let filtered = solver.filter(crane, outcome, &CandidateSet::full(&vocab)).unwrap();
        assert_eq!(&filtered, round.candidates());
    }
}
