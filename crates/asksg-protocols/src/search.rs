//! Search request and result definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Which retrieval path a query takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// BM25 keyword scoring only.
    #[serde(rename = "keyword", alias = "lexical")]
    Lexical,

    /// Embedding nearest-neighbour scoring only.
    #[serde(rename = "semantic", alias = "vector")]
    Vector,

    /// Weighted fusion of both.
    #[default]
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Lexical => "keyword",
            SearchMode::Vector => "semantic",
            SearchMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-modality scores of one result. Unset components were never computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub lexical: Option<f32>,
    pub vector: Option<f32>,
    pub combined: Option<f32>,
}

impl ScoreComponents {
    /// Scores of a lexical-only result; `combined` mirrors `lexical`.
    pub fn lexical_only(score: f32) -> Self {
        Self {
            lexical: Some(score),
            vector: None,
            combined: Some(score),
        }
    }

    /// Scores of a vector-only result; `combined` mirrors `vector`.
    pub fn vector_only(score: f32) -> Self {
        Self {
            lexical: None,
            vector: Some(score),
            combined: Some(score),
        }
    }

    /// Scores of a fused result.
    pub fn fused(lexical: f32, vector: f32, combined: f32) -> Self {
        Self {
            lexical: Some(lexical),
            vector: Some(vector),
            combined: Some(combined),
        }
    }

    /// The ranking key, `0.0` when nothing was combined.
    pub fn ranking_score(&self) -> f32 {
        self.combined.unwrap_or(0.0)
    }
}

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub scores: ScoreComponents,
}

impl RankedResult {
    pub fn new(document: &Document, scores: ScoreComponents) -> Self {
        Self {
            document_id: document.id.clone(),
            title: document.title.clone(),
            description: document.description.clone(),
            scores,
        }
    }
}

/// Ranked results of one query, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<RankedResult>,

    #[serde(rename = "method")]
    pub mode: SearchMode,
}

impl SearchOutcome {
    pub fn new(results: Vec<RankedResult>, mode: SearchMode) -> Self {
        Self { results, mode }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Document ids in rank order.
    pub fn document_ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.document_id.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
