//! Startup wiring: configuration, corpus, indices, embedding providers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use asksg_api::AppState;
use asksg_config::{
    Config, ConfigError, ConfigLoader, ConfigValidator, EmbeddingConfig, RemoteEmbeddingConfig,
    SearchConfig,
};
use asksg_protocols::{EmbeddingError, EmbeddingProvider, NearestNeighbors};
use asksg_search_hybrid::{CorpusStore, HybridRanker, RankerConfig};
use asksg_search_vector::{
    FlatIndex, HashEmbedding, RemoteEmbedding, RemoteEmbeddingOptions, RetryConfig,
    VectorIndexAdapter,
};

/// Get the .asksg directory path.
pub(crate) fn asksg_dir() -> PathBuf {
    ConfigLoader::data_dir()
}

/// Load and validate the configuration file. A missing file means defaults.
pub(crate) fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        info!("Loading configuration from {}", path.display());
        ConfigLoader::load(path)?
    } else {
        warn!("Config file {} not found, using defaults", path.display());
        Config::default()
    };

    let report = ConfigValidator::ensure_valid(&config)?;
    for warning in &report.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    Ok(config)
}

/// The embedding provider used to build the index and answer local queries.
///
/// A model the binary cannot run is a startup error: substituting another
/// provider would query the index from a different embedding space.
pub(crate) fn local_embedder(
    config: &EmbeddingConfig,
) -> Result<Arc<dyn EmbeddingProvider>, ConfigError> {
    match config.local.as_str() {
        #[cfg(feature = "local-embeddings")]
        "fastembed" => Ok(Arc::new(
            asksg_search_vector::LocalModelEmbedding::new()
                .with_cache_dir(asksg_dir().join("models")),
        )),
        #[cfg(not(feature = "local-embeddings"))]
        "fastembed" => Err(ConfigError::InvalidValue {
            field: "embedding.local".to_string(),
            message: "fastembed needs a binary built with the local-embeddings feature"
                .to_string(),
        }),
        "hash" => Ok(Arc::new(HashEmbedding::new(config.hash_dimension))),
        other => {
            warn!("Unknown local embedding provider '{}', using hash embedding", other);
            Ok(Arc::new(HashEmbedding::new(config.hash_dimension)))
        }
    }
}

/// The remote feature-extraction provider.
pub(crate) fn remote_embedder(
    config: &RemoteEmbeddingConfig,
) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError> {
    let retry = RetryConfig {
        max_retries: config.max_retries,
        base_delay: config.base_delay(),
        max_delay: config.max_delay(),
        ..RetryConfig::default()
    };

    let mut options = RemoteEmbeddingOptions::new(config.endpoint.clone(), config.dimension)
        .with_request_timeout(config.request_timeout())
        .with_retry(retry);
    if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
        options = options.with_token(token);
    }

    Ok(Arc::new(RemoteEmbedding::new(options)?))
}

pub(crate) fn ranker_config(search: &SearchConfig) -> RankerConfig {
    RankerConfig {
        lexical_weight: search.lexical_weight,
        vector_weight: search.vector_weight,
        top_k: search.top_k,
        candidate_multiplier: search.candidate_multiplier,
        embedding_timeout: search.embedding_timeout(),
    }
}

/// Load the corpus and vector index, then assemble the rankers.
///
/// Any failure here is fatal: the server never binds with a broken index or
/// with a local provider other than the one that built the index.
pub(crate) fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let corpus = Arc::new(CorpusStore::load(&config.corpus.snapshot_path)?);

    let index = FlatIndex::load(&config.index.vector_index_path)?;
    info!(
        "Vector index loaded from {} ({} vectors, dimension {})",
        config.index.vector_index_path.display(),
        index.len(),
        index.dimension()
    );

    let embedder = local_embedder(&config.embedding)?;
    index.ensure_embedder(embedder.id())?;
    let vectors = VectorIndexAdapter::new(Arc::new(index));

    let local = HybridRanker::new(corpus, vectors, embedder, ranker_config(&config.search))?;
    info!("Local ranker ready (embedding: {})", local.embedder_id());

    let mut state = AppState::new(local.clone());
    if let Some(remote_config) = &config.embedding.remote {
        let remote = local.with_embedder(remote_embedder(remote_config)?)?;
        info!("Remote embedding enabled ({})", remote_config.endpoint);
        state = state.with_remote(remote);
    }

    Ok(state)
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod tests;
