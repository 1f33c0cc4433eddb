//! On-disk cache for outcome tables
//!
//! One file per vocabulary, named after its [`Fingerprint`]. The blob carries
//! its own header (magic, fingerprint, word length, size) and is validated on
//! load; anything that does not match the active vocabulary is rebuilt rather
//! than trusted.
//!
//! Load-or-build runs under an exclusive lock on a sidecar lock file, and new
//! tables are written to a temporary file and renamed into place, so concurrent
//! callers never observe a partially written cache.

use super::OutcomeTable;
use crate::core::{Fingerprint, Vocabulary};
use crate::error::{EngineError, Result};
use bincode::{Decode, Encode};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const MAGIC: [u8; 8] = *b"WRDLOUT1";

/// Persisted form of an [`OutcomeTable`]
#[derive(Encode, Decode)]
struct CacheFile {
    magic: [u8; 8],
    fingerprint: u64,
    word_len: u32,
    size: u32,
    outcomes: Vec<u16>,
}

/// Upper bound on bytes a decoded blob may claim, so a corrupt length prefix
/// fails to decode instead of allocating
const DECODE_LIMIT: usize = 1 << 30;

fn bincode_config() -> impl bincode::config::Config {
    bincode::config::standard()
        .with_fixed_int_encoding()
        .with_limit::<DECODE_LIMIT>()
}

/// How [`TableCache::load_or_build`] obtained its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Loaded from a valid cache file
    Hit,
    /// No cache file existed; built and stored
    Built,
    /// Cache file was stale or corrupt; rebuilt and replaced
    Rebuilt,
}

/// Directory of persisted outcome tables
#[derive(Debug, Clone)]
pub struct TableCache {
    dir: PathBuf,
}

/// Exclusive lock on a cache entry, released on drop
struct CacheLock {
    file: File,
}

impl CacheLock {
    fn acquire(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        file.lock()?;
        Ok(Self { file })
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        // Closing the file releases the lock as well
        let _ = self.file.unlock();
    }
}

impl TableCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for a vocabulary fingerprint
    #[must_use]
    pub fn path_for(&self, fingerprint: Fingerprint) -> PathBuf {
        self.dir.join(format!("outcomes-{fingerprint}.bin"))
    }

    fn lock_path_for(&self, fingerprint: Fingerprint) -> PathBuf {
        self.dir.join(format!("outcomes-{fingerprint}.lock"))
    }

    /// Load the cached table for `vocab`
    ///
    /// # Errors
    /// - `Io` if the file is missing or unreadable
    /// - `CacheDecode` if the blob is truncated or malformed
    /// - `CacheMismatch` if the blob belongs to another vocabulary
    pub fn load(&self, vocab: &Vocabulary) -> Result<OutcomeTable> {
        let path = self.path_for(vocab.fingerprint());
        let mut reader = BufReader::new(File::open(&path)?);
        let file: CacheFile = bincode::decode_from_std_read(&mut reader, bincode_config())?;

        if file.magic != MAGIC {
            return Err(EngineError::CacheMismatch {
                path,
                reason: "not an outcome table file".to_string(),
            });
        }

        OutcomeTable::from_parts(
            vocab,
            path,
            Fingerprint::new(file.fingerprint),
            file.word_len as usize,
            file.size as usize,
            file.outcomes,
        )
    }

    /// Persist `table`, replacing any existing file atomically
    ///
    /// # Errors
    /// Returns `Io` or `CacheEncode` if writing fails.
    pub fn store(&self, table: &OutcomeTable) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(table.fingerprint());
        let tmp_path = path.with_extension("bin.tmp");

        let file = CacheFile {
            magic: MAGIC,
            fingerprint: table.fingerprint().value(),
            word_len: table.word_len() as u32,
            size: table.size() as u32,
            outcomes: table.raw().to_vec(),
        };

        if let Err(e) = write_blob(&tmp_path, &file) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        fs::rename(&tmp_path, &path)?;
        Ok(path)
    }

    /// Load the table for `vocab`, building and storing it if needed
    ///
    /// # Errors
    /// Returns `Io` if the cache directory or lock cannot be used, or if the
    /// rebuilt table cannot be stored.
    pub fn load_or_build(&self, vocab: &Vocabulary) -> Result<(OutcomeTable, CacheStatus)> {
        self.load_or_build_with_progress(vocab, || {})
    }

    /// Same as [`TableCache::load_or_build`], reporting each built row to `on_row`
    ///
    /// # Errors
    /// See [`TableCache::load_or_build`].
    pub fn load_or_build_with_progress<F>(
        &self,
        vocab: &Vocabulary,
        on_row: F,
    ) -> Result<(OutcomeTable, CacheStatus)>
    where
        F: Fn() + Sync,
    {
        fs::create_dir_all(&self.dir)?;
        let _lock = CacheLock::acquire(&self.lock_path_for(vocab.fingerprint()))?;

        let status = match self.load(vocab) {
            Ok(table) => return Ok((table, CacheStatus::Hit)),
            Err(EngineError::Io(e)) if e.kind() == io::ErrorKind::NotFound => CacheStatus::Built,
            Err(
                EngineError::CacheMismatch { .. }
                | EngineError::CacheDecode(_)
                | EngineError::Io(_),
            ) => CacheStatus::Rebuilt,
            Err(e) => return Err(e),
        };

        let table = OutcomeTable::build_with_progress(vocab, on_row);
        self.store(&table)?;
        Ok((table, status))
    }
}

fn write_blob(path: &Path, file: &CacheFile) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::encode_into_std_write(file, &mut writer, bincode_config())?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
