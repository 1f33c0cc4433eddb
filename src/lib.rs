//! Wordle Entropy
//!
//! A decision engine for fixed-length word deduction games: precomputes every
//! guess/answer outcome once, ranks guesses by expected information and narrows
//! the candidate set after each observation.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_entropy::core::{Outcome, Vocabulary, Word};
//! use wordle_entropy::solver::{Solver, StrategyType};
//! use wordle_entropy::table::OutcomeTable;
//!
//! // Outcome of a single guess
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("snake").unwrap();
//! assert_eq!(Outcome::calculate(&guess, &answer).value(), 207);
//!
//! // Full engine over a small vocabulary
//! let vocab = Arc::new(Vocabulary::from_strs(["crane", "snake", "slate", "irate"]).unwrap());
//! let table = Arc::new(OutcomeTable::build(&vocab));
//! let solver = Solver::new(StrategyType::default(), vocab, table).unwrap();
//! let round = solver.play(1).unwrap();
//! assert!(round.state().is_solved());
//! ```

// Core domain types
pub mod core;

// Typed error taxonomy
pub mod error;

// Runtime configuration
pub mod config;

// Precomputed outcome table and its on-disk cache
pub mod table;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{EngineError, Result};
