//! Candidate answer sets
//!
//! A `CandidateSet` is owned by a single round and only ever shrinks.

use super::{Vocabulary, WordIndex};

/// Vocabulary indices still consistent with every observation of a round
///
/// Indices are kept sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    indices: Vec<WordIndex>,
}

impl CandidateSet {
    /// Every word in the vocabulary
    #[must_use]
    pub fn full(vocab: &Vocabulary) -> Self {
        Self {
            indices: vocab.indices().collect(),
        }
    }

    /// Build from arbitrary indices; sorts and deduplicates
    #[must_use]
    pub fn from_indices(mut indices: Vec<WordIndex>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Build from indices already sorted and unique
    pub(crate) fn from_sorted(indices: Vec<WordIndex>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[WordIndex] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = WordIndex> + '_ {
        self.indices.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, index: WordIndex) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The only remaining candidate, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<WordIndex> {
        match self.indices.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
