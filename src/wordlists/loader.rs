//! Word list loading utilities
//!
//! A word list is plain text with one word per line.

use crate::core::Vocabulary;
use crate::error::Result;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Normalize raw word-list text
///
/// Lines are trimmed and lowercased, blank lines skipped and repeats dropped
/// (first occurrence wins). Letters are not validated here.
///
/// # Examples
/// ```
/// use wordle_entropy::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\n slate \ncrane\n");
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Read and normalize a word list file
///
/// # Errors
/// Returns `Io` if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Build a vocabulary from a word list file
///
/// # Errors
/// Returns `Io` if the file cannot be read, or `InvalidVocabulary` if the list
/// is empty, has mixed lengths or contains non-letters.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::vocabulary_from_file;
///
/// let vocab = vocabulary_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn vocabulary_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    Vocabulary::from_strs(load_from_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_entropy_loader_{name}_{}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let words = parse_words("  crane\r\n\n\tslate\n   \nIRATE");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_keeps_first_occurrence() {
        let words = parse_words("slate\ncrane\nSLATE\nirate\ncrane");
        assert_eq!(words, vec!["slate", "crane", "irate"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n\n  \n").is_empty());
    }

    #[test]
    fn loads_vocabulary_from_file() {
        let path = scratch_file("ok", "crane\nslate\n\nirate\n");
        let vocab = vocabulary_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.index_of("irate").unwrap(), 2);
    }

    #[test]
    fn mixed_lengths_are_invalid() {
        let path = scratch_file("mixed", "crane\ncat\n");
        let result = vocabulary_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::InvalidVocabulary { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = vocabulary_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(EngineError::Io(_))));
    }
}
