use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::QuestionBank;

/// Error loading the question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} contains no subjects")]
    EmptyBank { path: PathBuf },
    #[error("{path}: subject '{subject}' has no questions")]
    EmptySubject { path: PathBuf, subject: String },
}

/// Load a question bank from a JSON file mapping subject keys to ordered
/// question lists. Every listed subject must carry at least one question.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank: QuestionBank = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if bank.is_empty() {
        return Err(LoadError::EmptyBank {
            path: path.to_path_buf(),
        });
    }
    for (subject, questions) in bank.iter() {
        if questions.is_empty() {
            return Err(LoadError::EmptySubject {
                path: path.to_path_buf(),
                subject: subject.key().to_string(),
            });
        }
    }

    Ok(bank)
}
