//! Core domain types for the word game
//!
//! This module contains the fundamental domain types and does no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidates;
mod outcome;
mod vocabulary;
mod word;

pub use candidates::CandidateSet;
pub use outcome::{Label, Outcome, encode};
pub use vocabulary::{Fingerprint, Vocabulary, WordIndex};
pub use word::{MAX_WORD_LEN, Word, WordError};
