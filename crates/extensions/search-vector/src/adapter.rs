//! Query-side view over a nearest-neighbour index.

use std::sync::Arc;

use asksg_protocols::{NearestNeighbors, Neighbor, SearchError};

/// Validates query vectors and bounds `k` before delegating to the index.
#[derive(Clone)]
pub struct VectorIndexAdapter {
    index: Arc<dyn NearestNeighbors>,
}

impl VectorIndexAdapter {
    pub fn new(index: Arc<dyn NearestNeighbors>) -> Self {
        Self { index }
    }

    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Up to `k` neighbours of `vector`, closest first.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor>, SearchError> {
        if vector.len() != self.index.dimension() {
            return Err(SearchError::DimensionMismatch {
                expected: self.index.dimension(),
                actual: vector.len(),
            });
        }

        let k = k.min(self.index.len());
        if k == 0 {
            return Ok(Vec::new());
        }
        Ok(self.index.search(vector, k))
    }
}

impl std::fmt::Debug for VectorIndexAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndexAdapter")
            .field("dimension", &self.index.dimension())
            .field("len", &self.index.len())
            .finish()
    }
}

/// Convert distances into `[0, 1]` similarities relative to the farthest hit.
///
/// If every distance is zero each neighbour gets similarity `1.0`.
pub fn distances_to_similarities(neighbors: &[Neighbor]) -> Vec<(usize, f32)> {
    let max = neighbors
        .iter()
        .map(|n| n.distance)
        .fold(0.0_f32, f32::max);

    neighbors
        .iter()
        .map(|n| {
            let similarity = if max > 0.0 {
                1.0 - n.distance / max
            } else {
                1.0
            };
            (n.position, similarity)
        })
        .collect()
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
