//! Ranker construction and query errors.

use thiserror::Error;

use super::EmbeddingError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Cannot build an index over an empty corpus")]
    EmptyCorpus,

    #[error("Fusion weights must sum to 1.0: lexical={lexical}, vector={vector}")]
    InvalidWeights { lexical: f32, vector: f32 },

    #[error("top_k must be at least 1, got {0}")]
    InvalidTopK(usize),

    #[error("Candidate multiplier must be at least 1, got {0}")]
    InvalidCandidateMultiplier(usize),

    #[error("Dimension mismatch: index expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Vector index holds {index} vectors but the corpus has {corpus} documents")]
    CorpusIndexMismatch { corpus: usize, index: usize },

    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),
}

/// A wrong-length query vector is a dimension mismatch; every other
/// provider failure makes search unavailable.
impl From<EmbeddingError> for SearchError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::DimensionMismatch { expected, actual } => {
                SearchError::DimensionMismatch { expected, actual }
            }
            other => SearchError::SearchUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_invalid_weights_display() {
        let err = SearchError::InvalidWeights {
            lexical: 0.6,
            vector: 0.6,
        };
        let display = err.to_string();
        assert!(display.contains("sum to 1.0"));
        assert!(display.contains("0.6"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SearchError::DimensionMismatch {
            expected: 384,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: index expects 384, got 3"
        );
    }

    #[test]
    fn test_from_embedding_error() {
        let err: SearchError = EmbeddingError::Timeout(Duration::from_secs(5)).into();
        match err {
            SearchError::SearchUnavailable(message) => assert!(message.contains("5s")),
            other => panic!("Expected SearchUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_from_embedding_dimension_mismatch() {
        let err: SearchError = EmbeddingError::DimensionMismatch {
            expected: 384,
            actual: 3,
        }
        .into();
        assert!(matches!(
            err,
            SearchError::DimensionMismatch {
                expected: 384,
                actual: 3
            }
        ));
    }
}
