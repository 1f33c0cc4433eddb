//! Guess selection, candidate filtering and round orchestration
//!
//! The [`Solver`] binds a [`Strategy`] to a vocabulary and its outcome table;
//! [`Round`] tracks one game's candidate set.

mod engine;
pub mod entropy;
mod filter;
mod round;
pub mod strategy;
pub mod two_step;

pub use engine::{DEFAULT_MAX_GUESSES, Solver};
pub use filter::{filter_candidates, narrow, partition};
pub use round::{Round, RoundState, Turn};
pub use strategy::{EntropyStrategy, Strategy, StrategyType, TwoStepStrategy};
