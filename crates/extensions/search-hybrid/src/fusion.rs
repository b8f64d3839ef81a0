//! Weighted linear fusion of keyword and vector candidates.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Weights applied to normalized scores. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub lexical: f32,
    pub vector: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            lexical: 0.5,
            vector: 0.5,
        }
    }
}

/// Per-document scores after fusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedScore {
    pub position: usize,
    pub lexical: f32,
    pub vector: f32,
    pub combined: f32,
}

/// Best first; equal scores keep the lower corpus position first.
fn descending(a_score: f32, a_pos: usize, b_score: f32, b_pos: usize) -> Ordering {
    b_score.total_cmp(&a_score).then(a_pos.cmp(&b_pos))
}

/// Sort `(position, score)` pairs best first with position tiebreak.
pub fn rank_descending(scores: &mut [(usize, f32)]) {
    scores.sort_by(|a, b| descending(a.1, a.0, b.1, b.0));
}

/// Union both candidate lists by corpus position and combine their scores.
///
/// A document missing from one side scores `0.0` on that side. The result is
/// sorted best first and not truncated.
pub fn fuse(
    lexical: &[(usize, f32)],
    vector: &[(usize, f32)],
    weights: FusionWeights,
) -> Vec<FusedScore> {
    let mut merged: BTreeMap<usize, (f32, f32)> = BTreeMap::new();

    for &(position, score) in lexical {
        merged.entry(position).or_insert((0.0, 0.0)).0 = score;
    }
    for &(position, score) in vector {
        merged.entry(position).or_insert((0.0, 0.0)).1 = score;
    }

    let mut fused: Vec<FusedScore> = merged
        .into_iter()
        .map(|(position, (lexical, vector))| FusedScore {
            position,
            lexical,
            vector,
            combined: weights.lexical * lexical + weights.vector * vector,
        })
        .collect();

    fused.sort_by(|a, b| descending(a.combined, a.position, b.combined, b.position));
    fused
}

#[cfg(test)]
#[path = "fusion_tests.rs"]
mod tests;
