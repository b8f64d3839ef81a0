//! `build-index` subcommand: embed the corpus and write the vector index.

use std::error::Error;

use tracing::{debug, info};

use asksg_config::Config;
use asksg_protocols::{Document, EmbeddingError, EmbeddingProvider, NearestNeighbors, SearchError};
use asksg_search_hybrid::CorpusStore;
use asksg_search_vector::FlatIndex;

use crate::components::local_embedder;

/// Build the vector index for the configured corpus snapshot.
pub(crate) async fn build_index(config: &Config, force: bool) -> Result<(), Box<dyn Error>> {
    let path = &config.index.vector_index_path;
    if path.exists() && !force {
        return Err(format!(
            "Vector index {} already exists, pass --force to rebuild it",
            path.display()
        )
        .into());
    }

    let corpus = CorpusStore::load(&config.corpus.snapshot_path)?;
    if corpus.is_empty() {
        return Err(SearchError::EmptyCorpus.into());
    }

    let embedder = local_embedder(&config.embedding)?;
    info!(
        "Embedding {} collections with {} (batch size {})",
        corpus.len(),
        embedder.id(),
        config.index.build_batch_size
    );

    let index = embed_corpus(&corpus, embedder.as_ref(), config.index.build_batch_size).await?;
    index.save(path)?;

    info!(
        "Vector index written to {} ({} vectors, dimension {})",
        path.display(),
        index.len(),
        index.dimension()
    );
    Ok(())
}

/// Embed every document in corpus order. Vector `i` belongs to document `i`.
pub(crate) async fn embed_corpus(
    corpus: &CorpusStore,
    embedder: &dyn EmbeddingProvider,
    batch_size: usize,
) -> Result<FlatIndex, Box<dyn Error>> {
    let mut index = FlatIndex::new(embedder.dimension())?.with_embedder(embedder.id());
    let texts: Vec<String> = corpus.iter().map(Document::embedding_text).collect();

    for (batch, chunk) in texts.chunks(batch_size.max(1)).enumerate() {
        let inputs: Vec<&str> = chunk.iter().map(String::as_str).collect();
        let embeddings = embedder.embed_batch(&inputs).await?;
        if embeddings.len() != inputs.len() {
            return Err(EmbeddingError::Failed(format!(
                "expected {} embeddings, provider returned {}",
                inputs.len(),
                embeddings.len()
            ))
            .into());
        }

        for embedding in &embeddings {
            index.add(&embedding.vector)?;
        }
        debug!("Embedded batch {} ({} texts)", batch + 1, inputs.len());
    }

    Ok(index)
}

#[cfg(test)]
#[path = "cmd_index_tests.rs"]
mod tests;
