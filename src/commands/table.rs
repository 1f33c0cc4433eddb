//! Outcome table preparation
//!
//! Loads the table for a vocabulary from the cache, building it with a
//! progress bar when the cache is cold or stale.

use crate::core::Vocabulary;
use crate::error::Result;
use crate::output::formatters::progress_style;
use crate::table::{CacheStatus, OutcomeTable, TableCache};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A ready outcome table and where it came from
pub struct PreparedTable {
    pub table: OutcomeTable,
    /// `None` when caching is disabled
    pub status: Option<CacheStatus>,
    /// Cache file backing the table
    pub path: Option<PathBuf>,
    pub elapsed: Duration,
}

/// Load or build the outcome table for `vocab`
///
/// With `cache_dir` set, the table is read from (or written to) that directory.
/// Without it, the table is always built in memory.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be created or written.
pub fn prepare_table(vocab: &Vocabulary, cache_dir: Option<&Path>) -> Result<PreparedTable> {
    let start = Instant::now();

    let pb = ProgressBar::new(vocab.len() as u64);
    pb.set_style(progress_style());
    pb.set_message("building outcome table");

    let (table, status, path) = if let Some(dir) = cache_dir {
        let cache = TableCache::new(dir);
        let (table, status) = cache.load_or_build_with_progress(vocab, || pb.inc(1))?;
        let path = cache.path_for(vocab.fingerprint());
        (table, Some(status), Some(path))
    } else {
        (OutcomeTable::build_with_progress(vocab, || pb.inc(1)), None, None)
    };

    pb.finish_and_clear();

    Ok(PreparedTable {
        table,
        status,
        path,
        elapsed: start.elapsed(),
    })
}
