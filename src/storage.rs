//! Persistence adapter for the results history and stats.
//!
//! The store never talks to storage directly: after a dispatch that reports
//! [`Effect::Persist`](crate::store::Effect), the presentation layer saves
//! both blobs through this adapter. Saving is best effort; a failed write
//! leaves the in-memory state authoritative until the next save. On load,
//! absent or corrupt data reads as "no history yet".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::models::{QuizResult, QuizStats};

/// File name for the results-history blob.
const RESULTS_FILE: &str = "quiz-results.json";
/// File name for the stats blob.
const STATS_FILE: &str = "quiz-stats.json";

/// A save failed. Never surfaces past the adapter boundary as a core error;
/// callers log it and carry on.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize {what}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable storage for the two independently keyed blobs.
pub trait ResultsStorage {
    /// The persisted history, or `None` when absent or unreadable.
    fn load_history(&self) -> Option<Vec<QuizResult>>;
    /// The persisted stats, or `None` when absent or unreadable.
    fn load_stats(&self) -> Option<QuizStats>;
    fn save_history(&self, history: &[QuizResult]) -> Result<(), StorageError>;
    fn save_stats(&self, stats: &QuizStats) -> Result<(), StorageError>;
}

/// JSON-file storage: one file per blob inside a data directory.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read saved data, starting fresh");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), %err, "saved data is corrupt, starting fresh");
                None
            }
        }
    }

    fn save_json<T: serde::Serialize>(
        &self,
        file: &str,
        what: &'static str,
        value: &T,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialize { what, source })?;
        let path = self.dir.join(file);
        write_file(&path, &json).map_err(|source| StorageError::Write { path, source })
    }
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

impl ResultsStorage for JsonFileStorage {
    fn load_history(&self) -> Option<Vec<QuizResult>> {
        self.load_json(RESULTS_FILE)
    }

    fn load_stats(&self) -> Option<QuizStats> {
        self.load_json(STATS_FILE)
    }

    fn save_history(&self, history: &[QuizResult]) -> Result<(), StorageError> {
        self.save_json(RESULTS_FILE, "results history", &history)
    }

    fn save_stats(&self, stats: &QuizStats) -> Result<(), StorageError> {
        self.save_json(STATS_FILE, "stats", stats)
    }
}
