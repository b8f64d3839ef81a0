//! Application state.

use std::time::Instant;

use asksg_protocols::SearchError;
use asksg_search_hybrid::HybridRanker;

/// Application state shared across handlers.
///
/// Holds one ranker per configured embedding provider. Both share the
/// same corpus and indices.
pub struct AppState {
    local: HybridRanker,
    remote: Option<HybridRanker>,
    started_at: Instant,
}

impl AppState {
    pub fn new(local: HybridRanker) -> Self {
        Self {
            local,
            remote: None,
            started_at: Instant::now(),
        }
    }

    /// Enable `use_remote_embedding` requests.
    pub fn with_remote(mut self, remote: HybridRanker) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Ranker for a request.
    pub fn ranker(&self, use_remote: bool) -> Result<&HybridRanker, SearchError> {
        if !use_remote {
            return Ok(&self.local);
        }
        self.remote.as_ref().ok_or_else(|| {
            SearchError::SearchUnavailable("remote embedding is not configured".to_string())
        })
    }

    pub fn local(&self) -> &HybridRanker {
        &self.local
    }

    pub fn remote(&self) -> Option<&HybridRanker> {
        self.remote.as_ref()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
