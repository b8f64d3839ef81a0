//! Embedding provider configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Local provider names understood by the service.
pub const LOCAL_PROVIDERS: [&str; 2] = ["hash", "fastembed"];

/// Embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Local provider: "hash" or "fastembed".
    #[serde(default = "default_local")]
    pub local: String,

    /// Dimension of the hash provider.
    #[serde(default = "default_dimension")]
    pub hash_dimension: usize,

    /// Remote inference endpoint; absent disables remote embedding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteEmbeddingConfig>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            local: default_local(),
            hash_dimension: default_dimension(),
            remote: None,
        }
    }
}

fn default_local() -> String {
    "hash".to_string()
}

fn default_dimension() -> usize {
    384
}

/// Remote feature-extraction endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEmbeddingConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token, usually `${HF_TOKEN}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_dimension")]
    pub dimension: usize,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Timeout of a single HTTP request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl RemoteEmbeddingConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for RemoteEmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            dimension: default_dimension(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/pipeline/feature-extraction/sentence-transformers/all-MiniLM-L6-v2"
        .to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    8000
}

fn default_request_timeout() -> u64 {
    20
}
