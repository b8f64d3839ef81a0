//! Ranking configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hybrid ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of the normalized BM25 score in hybrid fusion.
    #[serde(default = "default_weight")]
    pub lexical_weight: f32,

    /// Weight of the normalized vector similarity in hybrid fusion.
    #[serde(default = "default_weight")]
    pub vector_weight: f32,

    /// Maximum number of results per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Hybrid candidate window per modality, as a multiple of `top_k`.
    #[serde(default = "default_candidate_multiplier")]
    pub candidate_multiplier: usize,

    /// Upper bound for one query embedding call.
    #[serde(default = "default_embedding_timeout")]
    pub embedding_timeout_seconds: u64,
}

impl SearchConfig {
    pub fn embedding_timeout(&self) -> Duration {
        Duration::from_secs(self.embedding_timeout_seconds)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lexical_weight: default_weight(),
            vector_weight: default_weight(),
            top_k: default_top_k(),
            candidate_multiplier: default_candidate_multiplier(),
            embedding_timeout_seconds: default_embedding_timeout(),
        }
    }
}

fn default_weight() -> f32 {
    0.5
}

fn default_top_k() -> usize {
    5
}

fn default_candidate_multiplier() -> usize {
    1
}

fn default_embedding_timeout() -> u64 {
    30
}
