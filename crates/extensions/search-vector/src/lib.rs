//! Vector search for AskSG.
//!
//! Provides an exact flat L2 index over collection embeddings, the adapter
//! the ranker queries through, and the embedding providers that turn text
//! into vectors.

mod adapter;
mod flat;
mod hash;
#[cfg(feature = "local-embeddings")]
mod local;
mod remote;
mod retry;

pub use adapter::{VectorIndexAdapter, distances_to_similarities};
pub use flat::FlatIndex;
pub use hash::HashEmbedding;
#[cfg(feature = "local-embeddings")]
pub use local::LocalModelEmbedding;
pub use remote::{RemoteEmbedding, RemoteEmbeddingOptions};
pub use retry::RetryConfig;
