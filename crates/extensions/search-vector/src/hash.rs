//! Offline bag-of-words embedding.

use async_trait::async_trait;
use asksg_protocols::{Embedding, EmbeddingError, EmbeddingProvider};
use xxhash_rust::xxh3::xxh3_64;

/// Default dimension, matching all-MiniLM-L6-v2.
pub const DEFAULT_DIMENSION: usize = 384;

/// Deterministic hash-based embedding. Not semantic, but stable across runs
/// and toolchains (XXH3, seed 0) so an index built with it can be queried
/// with it later.
#[derive(Debug, Clone)]
pub struct HashEmbedding {
    dimension: usize,
}

impl HashEmbedding {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_text(&self, text: &str) -> Embedding {
        let mut vector = vec![0.0f32; self.dimension];

        for (i, word) in text.split_whitespace().enumerate() {
            let hash = word_hash(word);

            for j in 0..self.dimension {
                let idx = (i + j) % self.dimension;
                let val = ((hash >> (j % 64)) & 0xFF) as f32 / 255.0 - 0.5;
                vector[idx] += val;
            }
        }

        let mut embedding = Embedding::new(vector);
        embedding.normalize();
        embedding
    }
}

fn word_hash(word: &str) -> u64 {
    xxh3_64(word.to_lowercase().as_bytes())
}

impl Default for HashEmbedding {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    fn id(&self) -> &str {
        "hash"
    }

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if self.dimension == 0 {
            return Err(EmbeddingError::InvalidInput(
                "hash embedding dimension is zero".to_string(),
            ));
        }
        Ok(self.hash_text(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
