//! # AskSG Protocols
//!
//! Shared data model and capability definitions for AskSG search.
//! Contains only types and interfaces - no implementations.
//!
//! ## Core Traits
//!
//! - [`EmbeddingProvider`] - Turns text into a fixed-length vector
//! - [`NearestNeighbors`] - k-nearest-neighbour lookup over corpus-ordered vectors

pub mod document;
pub mod embedding;
pub mod error;
pub mod search;
pub mod vector;

pub use document::{Document, DESCRIPTION_PLACEHOLDER};
pub use embedding::{Embedding, EmbeddingProvider};
pub use error::{CorpusError, EmbeddingError, SearchError, VectorIndexError};
pub use search::{RankedResult, ScoreComponents, SearchMode, SearchOutcome};
pub use vector::{NearestNeighbors, Neighbor};
