//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;
pub mod solve;
pub mod table;

pub use analyze::{AnalysisResult, analyze_word};
pub use simple::{run_session, run_simple};
pub use simulate::{RoundResult, SimulationStats, pick_targets, run_simulation};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use table::{PreparedTable, prepare_table};
