//! Corpus snapshot loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Duplicate document id in corpus: {0}")]
    DuplicateDocument(String),

    #[error("Invalid corpus record at position {position}: {message}")]
    InvalidRecord { position: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
