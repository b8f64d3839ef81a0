//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod schema_embedding;
mod schema_search;

pub use schema_embedding::*;
pub use schema_search::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Corpus snapshot location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// JSON array of collection records, in corpus order.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/collections.json")
}

/// Vector index snapshot location and build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Flat index snapshot built over the corpus, in corpus order.
    #[serde(default = "default_vector_index_path")]
    pub vector_index_path: PathBuf,

    /// Documents embedded per batch while building.
    #[serde(default = "default_build_batch_size")]
    pub build_batch_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            vector_index_path: default_vector_index_path(),
            build_batch_size: default_build_batch_size(),
        }
    }
}

fn default_vector_index_path() -> PathBuf {
    PathBuf::from("data/collections.index.json")
}

fn default_build_batch_size() -> usize {
    32
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
