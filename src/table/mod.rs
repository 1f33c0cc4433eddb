//! Precomputed guess × answer outcome table
//!
//! `table[g][a]` is the outcome of guessing word `g` against hidden answer `a`,
//! both addressed by vocabulary index. The table is built once per vocabulary
//! (the dominant `O(n²·L)` cost of the engine), is immutable afterwards and can
//! be shared across threads behind an `Arc`.

pub mod cache;

pub use cache::{CacheStatus, TableCache};

use crate::core::{CandidateSet, Fingerprint, Outcome, Vocabulary, WordIndex, encode};
use crate::error::{EngineError, Result};
use rayon::prelude::*;
use std::path::PathBuf;

/// Dense `n × n` outcome matrix, row-major by guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    fingerprint: Fingerprint,
    word_len: usize,
    size: usize,
    outcomes: Vec<u16>,
}

impl OutcomeTable {
    /// Build the full table for `vocab`
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Outcome, Vocabulary};
    /// use wordle_entropy::table::OutcomeTable;
    ///
    /// let vocab = Vocabulary::from_strs(["crane", "snake"]).unwrap();
    /// let table = OutcomeTable::build(&vocab);
    ///
    /// assert_eq!(table.outcome(0, 1), Outcome::new(207));
    /// assert!(table.outcome(1, 1).is_perfect(5));
    /// ```
    #[must_use]
    pub fn build(vocab: &Vocabulary) -> Self {
        Self::build_with_progress(vocab, || {})
    }

    /// Build the full table, calling `on_row` once per finished guess row
    ///
    /// Rows are computed in parallel; each only reads the vocabulary.
    #[must_use]
    pub fn build_with_progress<F>(vocab: &Vocabulary, on_row: F) -> Self
    where
        F: Fn() + Sync,
    {
        let words = vocab.words();
        let size = words.len();
        let mut outcomes = vec![0u16; size * size];

        outcomes
            .par_chunks_mut(size.max(1))
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (slot, answer) in row.iter_mut().zip(words) {
                    *slot = encode(guess.letters(), answer.letters()).value();
                }
                on_row();
            });

        Self {
            fingerprint: vocab.fingerprint(),
            word_len: vocab.word_len(),
            size,
            outcomes,
        }
    }

    /// Reassemble a table from persisted parts, validating its shape
    pub(crate) fn from_parts(
        vocab: &Vocabulary,
        path: PathBuf,
        fingerprint: Fingerprint,
        word_len: usize,
        size: usize,
        outcomes: Vec<u16>,
    ) -> Result<Self> {
        let mismatch = |reason: String| EngineError::CacheMismatch {
            path: path.clone(),
            reason,
        };

        if fingerprint != vocab.fingerprint() {
            return Err(mismatch(format!(
                "fingerprint {fingerprint}, expected {}",
                vocab.fingerprint()
            )));
        }
        if word_len != vocab.word_len() || size != vocab.len() {
            return Err(mismatch(format!(
                "{size} words of {word_len} letters, expected {} of {}",
                vocab.len(),
                vocab.word_len()
            )));
        }
        if outcomes.len() != size * size {
            return Err(mismatch(format!(
                "{} outcomes, expected {}",
                outcomes.len(),
                size * size
            )));
        }
        let perfect = Outcome::perfect(word_len).value();
        if outcomes.iter().any(|&v| v > perfect) {
            return Err(mismatch(format!("outcome value above {perfect}")));
        }

        Ok(Self {
            fingerprint,
            word_len,
            size,
            outcomes,
        })
    }

    /// Outcome of guessing `guess` against hidden `answer`
    ///
    /// # Panics
    /// Panics if either index is `>= size()`
    #[inline]
    #[must_use]
    pub fn outcome(&self, guess: WordIndex, answer: WordIndex) -> Outcome {
        assert!(answer < self.size, "answer index out of range");
        Outcome::new(self.outcomes[guess * self.size + answer])
    }

    /// Checked variant of [`OutcomeTable::outcome`]
    ///
    /// # Errors
    /// Returns `UnknownIndex` if either index is out of range.
    pub fn try_outcome(&self, guess: WordIndex, answer: WordIndex) -> Result<Outcome> {
        self.check_index(guess)?;
        self.check_index(answer)?;
        Ok(self.outcome(guess, answer))
    }

    /// Raw outcome row for `guess`, indexed by answer
    ///
    /// # Panics
    /// Panics if `guess >= size()`
    #[inline]
    #[must_use]
    pub fn row(&self, guess: WordIndex) -> &[u16] {
        &self.outcomes[guess * self.size..(guess + 1) * self.size]
    }

    /// Outcomes for a sub-list of guesses against a sub-list of answers
    ///
    /// Pure indexing into the full table; nothing is recomputed.
    ///
    /// # Errors
    /// Returns `UnknownIndex` if any index is out of range.
    pub fn sub_table(
        &self,
        guesses: &[WordIndex],
        answers: &[WordIndex],
    ) -> Result<Vec<Vec<Outcome>>> {
        for &index in guesses.iter().chain(answers) {
            self.check_index(index)?;
        }
        Ok(guesses
            .iter()
            .map(|&g| {
                let row = self.row(g);
                answers.iter().map(|&a| Outcome::new(row[a])).collect()
            })
            .collect())
    }

    /// Number of words on each axis
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Whether this table was built from `vocab`
    #[must_use]
    pub fn matches(&self, vocab: &Vocabulary) -> bool {
        self.fingerprint == vocab.fingerprint()
            && self.size == vocab.len()
            && self.word_len == vocab.word_len()
    }

    /// Check that every index in `candidates` addresses this table
    ///
    /// # Errors
    /// Returns `UnknownIndex` for the largest out-of-range candidate.
    pub fn check_candidates(&self, candidates: &CandidateSet) -> Result<()> {
        candidates
            .as_slice()
            .last()
            .map_or(Ok(()), |&largest| self.check_index(largest))
    }

    pub(crate) fn raw(&self) -> &[u16] {
        &self.outcomes
    }

    pub(crate) fn check_index(&self, index: WordIndex) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(EngineError::UnknownIndex {
                index,
                size: self.size,
            })
        }
    }
}
