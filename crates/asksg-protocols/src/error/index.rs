//! Vector index build and snapshot errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorIndexError {
    #[error("Vector has {actual} dimensions, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Index dimension must be positive")]
    ZeroDimension,

    #[error("Index was built with embedding '{index}' but the provider is '{provider}'")]
    EmbedderMismatch { index: String, provider: String },

    #[error("Corrupt index snapshot: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
