//! Nearest-neighbour capability definitions.

use serde::{Deserialize, Serialize};

/// One nearest-neighbour hit: a corpus position and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub position: usize,
    pub distance: f32,
}

impl Neighbor {
    pub fn new(position: usize, distance: f32) -> Self {
        Self { position, distance }
    }
}

/// Read-only k-nearest-neighbour lookup over vectors stored in corpus order.
///
/// Vector `i` must be the embedding of corpus document `i`.
pub trait NearestNeighbors: Send + Sync {
    /// Dimension every stored vector has.
    fn dimension(&self) -> usize;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `k` neighbours, closest first. Distances are non-negative.
    ///
    /// Callers validate `query.len() == self.dimension()` beforehand.
    fn search(&self, query: &[f32], k: usize) -> Vec<Neighbor>;
}
