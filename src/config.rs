//! Runtime configuration
//!
//! Collected from CLI flags by the binary; the library only reads it.

use crate::solver::{DEFAULT_MAX_GUESSES, StrategyType};
use std::path::PathBuf;

/// Default location of the outcome-table cache, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Solver settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: StrategyType,
    pub max_guesses: usize,
    /// `None` disables the on-disk cache
    pub cache_dir: Option<PathBuf>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::default(),
            max_guesses: DEFAULT_MAX_GUESSES,
            cache_dir: Some(PathBuf::from(DEFAULT_CACHE_DIR)),
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: Option<PathBuf>) -> Self {
        self.cache_dir = cache_dir;
        self
    }
}
