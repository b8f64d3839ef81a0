//! Small in-memory catalogue shared by handler tests.

use std::sync::Arc;

use asksg_protocols::{Document, EmbeddingProvider};
use asksg_search_hybrid::{CorpusStore, HybridRanker, RankerConfig};
use asksg_search_vector::{FlatIndex, HashEmbedding, VectorIndexAdapter};

pub(crate) const DIMENSION: usize = 32;

pub(crate) fn catalogue() -> Vec<Document> {
    vec![
        Document::new("c1", "Bus stops", "Locations of bus stops across the island"),
        Document::new("c2", "Hawker centres", "Food centres and their opening hours"),
        Document::new("c3", "Rainfall", "Daily rainfall readings by weather station"),
        Document::new("c4", "School directory", "Primary and secondary schools"),
    ]
}

pub(crate) async fn ranker() -> HybridRanker {
    let documents = catalogue();
    let embedder = Arc::new(HashEmbedding::new(DIMENSION));

    let mut index = FlatIndex::new(DIMENSION).unwrap();
    for document in &documents {
        let embedding = embedder.embed(&document.embedding_text()).await.unwrap();
        index.add(&embedding.vector).unwrap();
    }

    let corpus = Arc::new(CorpusStore::from_documents(documents).unwrap());
    HybridRanker::new(
        corpus,
        VectorIndexAdapter::new(Arc::new(index)),
        embedder,
        RankerConfig {
            top_k: 3,
            ..RankerConfig::default()
        },
    )
    .unwrap()
}
