//! Embedding provider errors.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding failed: {0}")]
    Failed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding timed out after {0:?}")]
    Timeout(Duration),

    #[error("Embedding provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider returned {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_error_display() {
        let err = EmbeddingError::Failed("test error".to_string());
        assert_eq!(err.to_string(), "Embedding failed: test error");

        let err = EmbeddingError::InvalidInput("bad input".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad input");
    }

    #[test]
    fn test_timeout_display() {
        let err = EmbeddingError::Timeout(Duration::from_millis(1500));
        assert!(err.to_string().contains("1.5s"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = EmbeddingError::DimensionMismatch {
            expected: 384,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Provider returned 3 dimensions, expected 384");
    }

    #[test]
    fn test_embedding_error_debug() {
        let err = EmbeddingError::Unavailable("no remote".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Unavailable"));
    }
}
