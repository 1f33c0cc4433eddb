//! Indexed vocabulary of equal-length words
//!
//! Every word gets a dense index in `[0, n)` in the order it was supplied. The
//! outcome table is addressed by these indices, so a table is only valid for
//! the vocabulary it was built from; [`Fingerprint`] identifies that vocabulary.

use super::Word;
use crate::error::{EngineError, Result};
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::Hasher;
use std::ops::Range;

/// Dense index of a word inside its vocabulary
pub type WordIndex = usize;

/// Stable identity of a vocabulary's content and order
///
/// Two vocabularies share a fingerprint only if they hold the same words of the
/// same length in the same order (barring hash collisions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    fn of(words: &[Word], word_len: usize) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(word_len as u64);
        hasher.write_u64(words.len() as u64);
        for word in words {
            hasher.write(word.letters());
            // Separator keeps ["ab", "c"]-style splits distinct
            hasher.write_u8(0xff);
        }
        Self(hasher.finish())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Ordered, deduplicated collection of equal-length words
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<String, WordIndex>,
    word_len: usize,
    fingerprint: Fingerprint,
}

impl Vocabulary {
    /// Build a vocabulary, assigning indices in the given order
    ///
    /// # Errors
    /// Returns `InvalidVocabulary` if the list is empty, word lengths differ or
    /// a word appears twice.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let word_len = words
            .first()
            .map(Word::len)
            .ok_or_else(|| EngineError::InvalidVocabulary {
                reason: "word list is empty".to_string(),
            })?;

        let mut index = FxHashMap::default();
        index.reserve(words.len());

        for (i, word) in words.iter().enumerate() {
            if word.len() != word_len {
                return Err(EngineError::InvalidVocabulary {
                    reason: format!(
                        "word '{word}' has {} letters, expected {word_len}",
                        word.len()
                    ),
                });
            }
            if index.insert(word.text().to_string(), i).is_some() {
                return Err(EngineError::InvalidVocabulary {
                    reason: format!("duplicate word '{word}'"),
                });
            }
        }

        let fingerprint = Fingerprint::of(&words, word_len);

        Ok(Self {
            words,
            index,
            word_len,
            fingerprint,
        })
    }

    /// Build a vocabulary from raw strings
    ///
    /// # Errors
    /// Returns `InvalidVocabulary` if any entry is not a valid word, or for the
    /// same reasons as [`Vocabulary::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(["crane", "slate"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// assert_eq!(vocab.index_of("slate").unwrap(), 1);
    ///
    /// assert!(Vocabulary::from_strs(["crane", "cat"]).is_err());
    /// ```
    pub fn from_strs<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Word::new(s).map_err(|e| EngineError::InvalidVocabulary {
                    reason: format!("'{s}': {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(words)
    }

    /// Number of words (`n`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word (`L`)
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

    /// All words in index order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All indices, `0..n`
    #[inline]
    #[must_use]
    pub fn indices(&self) -> Range<WordIndex> {
        0..self.words.len()
    }

    /// Word at `index`
    ///
    /// # Errors
    /// Returns `UnknownIndex` if `index >= n`.
    pub fn word(&self, index: WordIndex) -> Result<&Word> {
        self.words.get(index).ok_or(EngineError::UnknownIndex {
            index,
            size: self.words.len(),
        })
    }

    /// Index of `word` (case-insensitive)
    ///
    /// # Errors
    /// Returns `UnknownWord` if the word is not in the vocabulary.
    pub fn index_of(&self, word: &str) -> Result<WordIndex> {
        let key = word.trim().to_lowercase();
        self.index
            .get(&key)
            .copied()
            .ok_or(EngineError::UnknownWord(key))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_ok()
    }
}
