//! Word lists
//!
//! The default vocabulary is compiled into the binary; other lists are loaded
//! from newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Vocabulary;
use crate::error::Result;

/// The embedded vocabulary, indexed in file order
///
/// # Errors
/// Returns `InvalidVocabulary` only if the embedded list itself is malformed.
pub fn default_vocabulary() -> Result<Vocabulary> {
    Vocabulary::from_strs(WORDS)
}
