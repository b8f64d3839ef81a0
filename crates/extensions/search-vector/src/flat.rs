//! Exact nearest-neighbour index by squared Euclidean distance.

use std::fs;
use std::path::{Path, PathBuf};

use asksg_protocols::{NearestNeighbors, Neighbor, VectorIndexError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Brute-force L2 index. Vector `i` belongs to corpus position `i`.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    data: Vec<f32>,
    /// Id of the provider that produced the vectors.
    embedder: Option<String>,
}

/// On-disk form of a [`FlatIndex`].
#[derive(Debug, Serialize, Deserialize)]
struct FlatIndexSnapshot {
    dimension: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    embedder: Option<String>,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Create an empty index.
    pub fn new(dimension: usize) -> Result<Self, VectorIndexError> {
        if dimension == 0 {
            return Err(VectorIndexError::ZeroDimension);
        }
        Ok(Self {
            dimension,
            data: Vec::new(),
            embedder: None,
        })
    }

    /// Record which embedding provider the vectors come from.
    pub fn with_embedder(mut self, id: impl Into<String>) -> Self {
        self.embedder = Some(id.into());
        self
    }

    pub fn embedder(&self) -> Option<&str> {
        self.embedder.as_deref()
    }

    /// Reject queries embedded by a different provider than the index.
    /// Snapshots without a recorded provider are accepted.
    pub fn ensure_embedder(&self, provider: &str) -> Result<(), VectorIndexError> {
        match &self.embedder {
            Some(index) if index != provider => Err(VectorIndexError::EmbedderMismatch {
                index: index.clone(),
                provider: provider.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Append one vector; it takes the next corpus position.
    pub fn add(&mut self, vector: &[f32]) -> Result<usize, VectorIndexError> {
        if vector.len() != self.dimension {
            return Err(VectorIndexError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        let position = self.len();
        self.data.extend_from_slice(vector);
        Ok(position)
    }

    /// Vector stored at `position`.
    pub fn get(&self, position: usize) -> Option<&[f32]> {
        let start = position.checked_mul(self.dimension)?;
        self.data.get(start..start + self.dimension)
    }

    fn vectors(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.dimension)
    }

    /// Write the index as JSON. The file is replaced atomically.
    pub fn save(&self, path: &Path) -> Result<(), VectorIndexError> {
        let snapshot = FlatIndexSnapshot {
            dimension: self.dimension,
            embedder: self.embedder.clone(),
            vectors: self.vectors().map(<[f32]>::to_vec).collect(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = temp_path(path);
        let json = serde_json::to_vec(&snapshot)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        info!(
            "Saved vector index: {} vectors, dimension {} -> {}",
            self.len(),
            self.dimension,
            path.display()
        );
        Ok(())
    }

    /// Read an index written by [`FlatIndex::save`].
    pub fn load(path: &Path) -> Result<Self, VectorIndexError> {
        let content = fs::read(path)?;
        let snapshot: FlatIndexSnapshot = serde_json::from_slice(&content)?;

        let mut index = Self::new(snapshot.dimension)?;
        index.embedder = snapshot.embedder;
        index.data.reserve(snapshot.vectors.len() * snapshot.dimension);
        for (position, vector) in snapshot.vectors.iter().enumerate() {
            index.add(vector).map_err(|e| {
                VectorIndexError::Corrupt(format!("vector {}: {}", position, e))
            })?;
        }

        info!(
            "Loaded vector index: {} vectors, dimension {} from {}",
            index.len(),
            index.dimension,
            path.display()
        );
        Ok(index)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl NearestNeighbors for FlatIndex {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    fn search(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        let k = k.min(self.len());
        if k == 0 {
            return Vec::new();
        }

        let mut hits: Vec<Neighbor> = self
            .vectors()
            .enumerate()
            .map(|(position, v)| Neighbor::new(position, squared_l2(query, v)))
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.position.cmp(&b.position))
        });
        hits.truncate(k);

        debug!("Flat index search: k={}, scanned={}", k, self.len());
        hits
    }
}

#[cfg(test)]
#[path = "flat_tests.rs"]
mod tests;
