//! On-device all-MiniLM-L6-v2 embeddings via fastembed.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use asksg_protocols::{Embedding, EmbeddingError, EmbeddingProvider};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;
use tracing::{info, warn};

/// Output dimension of all-MiniLM-L6-v2.
pub const LOCAL_MODEL_DIMENSION: usize = 384;

/// Runs the model on the blocking pool. The model is loaded on first use.
pub struct LocalModelEmbedding {
    cache_dir: Option<PathBuf>,
    model: Arc<OnceLock<Result<Mutex<TextEmbedding>, String>>>,
}

impl LocalModelEmbedding {
    pub fn new() -> Self {
        Self {
            cache_dir: None,
            model: Arc::new(OnceLock::new()),
        }
    }

    /// Store downloaded model files under `dir`.
    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    fn run(
        model: &OnceLock<Result<Mutex<TextEmbedding>, String>>,
        cache_dir: Option<PathBuf>,
        texts: Vec<String>,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let loaded = model.get_or_init(|| {
            let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
            if let Some(dir) = cache_dir {
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    warn!("Failed to create model cache directory {:?}: {}", dir, e);
                }
                options = options.with_cache_dir(dir);
            }
            info!("Loading local embedding model all-MiniLM-L6-v2");
            TextEmbedding::try_new(options)
                .map(Mutex::new)
                .map_err(|e| format!("failed to load all-MiniLM-L6-v2: {}", e))
        });

        let model = loaded
            .as_ref()
            .map_err(|e| EmbeddingError::Unavailable(e.clone()))?;
        model
            .lock()
            .embed(texts, None)
            .map_err(|e| EmbeddingError::Failed(e.to_string()))
    }
}

impl Default for LocalModelEmbedding {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for LocalModelEmbedding {
    fn id(&self) -> &str {
        "fastembed"
    }

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let mut batch = self.embed_batch(&[text]).await?;
        batch
            .pop()
            .ok_or_else(|| EmbeddingError::Failed("model returned no vectors".to_string()))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let cache_dir = self.cache_dir.clone();
        let owned: Vec<String> = texts.iter().map(|t| t.to_string()).collect();

        let vectors = tokio::task::spawn_blocking(move || Self::run(&model, cache_dir, owned))
            .await
            .map_err(|e| EmbeddingError::Failed(format!("embedding task panicked: {}", e)))??;

        Ok(vectors.into_iter().map(Embedding::new).collect())
    }

    fn dimension(&self) -> usize {
        LOCAL_MODEL_DIMENSION
    }
}
