//! Error taxonomy for the decision engine
//!
//! Every failure the engine can report is one variant of [`EngineError`].
//! Only [`EngineError::CacheMismatch`] (and a missing cache file) is recovered
//! internally, by rebuilding the outcome table once.

use crate::core::{Outcome, WordIndex};
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The word list is empty, has inconsistent lengths, duplicates or invalid words
    #[error("invalid vocabulary: {reason}")]
    InvalidVocabulary { reason: String },

    /// A queried word is not part of the active vocabulary
    #[error("unknown word '{0}'")]
    UnknownWord(String),

    /// A queried index is outside `[0, size)`
    #[error("word index {index} is out of range for a vocabulary of {size} words")]
    UnknownIndex { index: WordIndex, size: usize },

    /// A persisted (or supplied) outcome table does not belong to the vocabulary
    #[error("outcome table at {} does not match the vocabulary: {reason}", path.display())]
    CacheMismatch { path: PathBuf, reason: String },

    /// No candidate is consistent with an observation
    #[error("no candidate is consistent with outcome {outcome} for guess #{guess}")]
    ExhaustedCandidates { guess: WordIndex, outcome: Outcome },

    /// A guess was requested for an empty candidate set or an empty guess pool
    #[error("no guess available: the candidate set or guess pool is empty")]
    NoCandidates,

    /// An observation was fed to a round that already ended
    #[error("the round is already over")]
    RoundOver,

    #[error("outcome cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode outcome cache: {0}")]
    CacheEncode(#[from] bincode::error::EncodeError),

    #[error("failed to decode outcome cache: {0}")]
    CacheDecode(#[from] bincode::error::DecodeError),
}
