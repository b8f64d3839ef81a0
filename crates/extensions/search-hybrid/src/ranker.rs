//! Hybrid ranker: keyword, vector and fused collection search.

use std::sync::Arc;
use std::time::{Duration, Instant};

use asksg_protocols::{
    Embedding, EmbeddingError, EmbeddingProvider, RankedResult, ScoreComponents, SearchError,
    SearchMode, SearchOutcome,
};
use asksg_search_vector::{VectorIndexAdapter, distances_to_similarities};
use tracing::{debug, warn};

use crate::corpus::CorpusStore;
use crate::fusion::{FusionWeights, fuse, rank_descending};
use crate::lexical::Bm25Index;
use crate::normalize::normalize_by_max;

/// Tolerance for the weight-sum check.
const WEIGHT_TOLERANCE: f32 = 0.001;

/// Ranking parameters, fixed for the lifetime of a ranker.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    pub lexical_weight: f32,
    pub vector_weight: f32,
    pub top_k: usize,
    /// Hybrid candidate window per side, as a multiple of `top_k`.
    pub candidate_multiplier: usize,
    pub embedding_timeout: Duration,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.5,
            vector_weight: 0.5,
            top_k: 5,
            candidate_multiplier: 1,
            embedding_timeout: Duration::from_secs(30),
        }
    }
}

impl RankerConfig {
    fn validate(&self) -> Result<(), SearchError> {
        let weights_ok = self.lexical_weight >= 0.0
            && self.vector_weight >= 0.0
            && ((self.lexical_weight + self.vector_weight) - 1.0).abs() <= WEIGHT_TOLERANCE;
        if !weights_ok {
            return Err(SearchError::InvalidWeights {
                lexical: self.lexical_weight,
                vector: self.vector_weight,
            });
        }
        if self.top_k < 1 {
            return Err(SearchError::InvalidTopK(self.top_k));
        }
        if self.candidate_multiplier < 1 {
            return Err(SearchError::InvalidCandidateMultiplier(
                self.candidate_multiplier,
            ));
        }
        Ok(())
    }

    fn weights(&self) -> FusionWeights {
        FusionWeights {
            lexical: self.lexical_weight,
            vector: self.vector_weight,
        }
    }

    fn candidate_window(&self) -> usize {
        self.top_k.saturating_mul(self.candidate_multiplier)
    }
}

/// Answers queries over one corpus. Shared state is immutable and cheap to clone.
#[derive(Clone)]
pub struct HybridRanker {
    corpus: Arc<CorpusStore>,
    lexical: Arc<Bm25Index>,
    vectors: VectorIndexAdapter,
    embedder: Arc<dyn EmbeddingProvider>,
    config: RankerConfig,
}

impl HybridRanker {
    /// Build the keyword index over `corpus` and assemble a ranker.
    pub fn new(
        corpus: Arc<CorpusStore>,
        vectors: VectorIndexAdapter,
        embedder: Arc<dyn EmbeddingProvider>,
        config: RankerConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        let lexical = Arc::new(Bm25Index::new(corpus.documents())?);
        Self::with_lexical_index(corpus, lexical, vectors, embedder, config)
    }

    /// Assemble a ranker from an already built keyword index.
    pub fn with_lexical_index(
        corpus: Arc<CorpusStore>,
        lexical: Arc<Bm25Index>,
        vectors: VectorIndexAdapter,
        embedder: Arc<dyn EmbeddingProvider>,
        config: RankerConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;

        if corpus.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        for index in [vectors.len(), lexical.len()] {
            if index != corpus.len() {
                return Err(SearchError::CorpusIndexMismatch {
                    corpus: corpus.len(),
                    index,
                });
            }
        }
        check_embedder(&vectors, embedder.as_ref())?;

        debug!(
            "Hybrid ranker ready: {} documents, dimension {}, embedder {}",
            corpus.len(),
            vectors.dimension(),
            embedder.id()
        );

        Ok(Self {
            corpus,
            lexical,
            vectors,
            embedder,
            config,
        })
    }

    /// A ranker over the same corpus and indices with a different embedder.
    pub fn with_embedder(&self, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self, SearchError> {
        check_embedder(&self.vectors, embedder.as_ref())?;
        Ok(Self {
            corpus: Arc::clone(&self.corpus),
            lexical: Arc::clone(&self.lexical),
            vectors: self.vectors.clone(),
            embedder,
            config: self.config.clone(),
        })
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn embedder_id(&self) -> &str {
        self.embedder.id()
    }

    pub fn dimension(&self) -> usize {
        self.vectors.dimension()
    }

    /// Run `query` in `mode`.
    pub async fn search(&self, query: &str, mode: SearchMode) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let outcome = match mode {
            SearchMode::Lexical => self.search_lexical(query),
            SearchMode::Vector => self.search_vector(query).await,
            SearchMode::Hybrid => self.search_hybrid(query).await,
        };

        match &outcome {
            Ok(o) => debug!(
                mode = %mode,
                query_len = query.len(),
                results = o.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search completed"
            ),
            Err(e) => warn!(mode = %mode, error = %e, "search failed"),
        }
        outcome
    }

    /// Keyword-only ranking; `lexical` and `combined` carry the same value.
    pub fn search_lexical(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let results = self
            .lexical_candidates(query, self.config.top_k)
            .into_iter()
            .filter_map(|(position, score)| {
                self.corpus
                    .get(position)
                    .map(|doc| RankedResult::new(doc, ScoreComponents::lexical_only(score)))
            })
            .collect();
        Ok(SearchOutcome::new(results, SearchMode::Lexical))
    }

    /// Vector-only ranking; `vector` and `combined` carry the same value.
    pub async fn search_vector(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let results = self
            .vector_candidates(query, self.config.top_k)
            .await?
            .into_iter()
            .filter_map(|(position, score)| {
                self.corpus
                    .get(position)
                    .map(|doc| RankedResult::new(doc, ScoreComponents::vector_only(score)))
            })
            .collect();
        Ok(SearchOutcome::new(results, SearchMode::Vector))
    }

    /// Fused ranking over the candidate window of both sides.
    pub async fn search_hybrid(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let window = self.config.candidate_window();
        let vector = self.vector_candidates(query, window).await?;
        let lexical = self.lexical_candidates(query, window);

        let mut fused = fuse(&lexical, &vector, self.config.weights());
        fused.truncate(self.config.top_k);

        let results = fused
            .into_iter()
            .filter_map(|f| {
                self.corpus.get(f.position).map(|doc| {
                    RankedResult::new(
                        doc,
                        ScoreComponents::fused(f.lexical, f.vector, f.combined),
                    )
                })
            })
            .collect();
        Ok(SearchOutcome::new(results, SearchMode::Hybrid))
    }

    /// Top `k` keyword scores, normalized over the whole corpus.
    fn lexical_candidates(&self, query: &str, k: usize) -> Vec<(usize, f32)> {
        let mut scores = self.lexical.score(query);
        normalize_by_max(&mut scores);
        rank_descending(&mut scores);
        scores.truncate(k);
        scores
    }

    /// Top `k` neighbours as similarities, normalized over the returned window.
    async fn vector_candidates(&self, query: &str, k: usize) -> Result<Vec<(usize, f32)>, SearchError> {
        let embedding = self.embed_query(query).await?;
        let neighbors = self.vectors.query(&embedding.vector, k)?;

        let mut similarities: Vec<(usize, f32)> = distances_to_similarities(&neighbors)
            .into_iter()
            .filter(|(position, _)| {
                let known = *position < self.corpus.len();
                if !known {
                    warn!("Vector index returned unknown position {}", position);
                }
                known
            })
            .collect();
        rank_descending(&mut similarities);
        Ok(similarities)
    }

    async fn embed_query(&self, query: &str) -> Result<Embedding, SearchError> {
        let limit = self.config.embedding_timeout;
        match tokio::time::timeout(limit, self.embedder.embed(query)).await {
            Ok(result) => result.map_err(SearchError::from),
            Err(_) => Err(EmbeddingError::Timeout(limit).into()),
        }
    }
}

impl std::fmt::Debug for HybridRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridRanker")
            .field("documents", &self.corpus.len())
            .field("vectors", &self.vectors)
            .field("embedder", &self.embedder.id())
            .field("config", &self.config)
            .finish()
    }
}

fn check_embedder(
    vectors: &VectorIndexAdapter,
    embedder: &dyn EmbeddingProvider,
) -> Result<(), SearchError> {
    if embedder.dimension() != vectors.dimension() {
        return Err(SearchError::DimensionMismatch {
            expected: vectors.dimension(),
            actual: embedder.dimension(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "ranker_tests.rs"]
mod tests;
