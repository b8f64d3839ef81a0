//! BM25 Okapi keyword scoring.

use std::collections::HashMap;

use asksg_protocols::{Document, SearchError};
use tracing::debug;

/// BM25 Okapi parameters.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    /// Term frequency saturation.
    pub k1: f64,
    /// Length normalization strength.
    pub b: f64,
    /// Floor for negative idf, as a fraction of the average idf.
    pub epsilon: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            epsilon: 0.25,
        }
    }
}

/// Lowercased whitespace tokens. Queries and documents use the same rule.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Term statistics over the whole corpus, built once.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    params: Bm25Params,
    term_freqs: Vec<HashMap<String, u32>>,
    doc_lens: Vec<usize>,
    avgdl: f64,
    idf: HashMap<String, f64>,
}

impl Bm25Index {
    /// Index `title + " " + description` of every document.
    pub fn new(documents: &[Document]) -> Result<Self, SearchError> {
        Self::with_params(documents, Bm25Params::default())
    }

    pub fn with_params(documents: &[Document], params: Bm25Params) -> Result<Self, SearchError> {
        if documents.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let mut term_freqs = Vec::with_capacity(documents.len());
        let mut doc_lens = Vec::with_capacity(documents.len());
        let mut doc_freqs: HashMap<String, u32> = HashMap::new();

        for doc in documents {
            let tokens = tokenize(&doc.lexical_text());
            doc_lens.push(tokens.len());

            let mut freqs: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *freqs.entry(token).or_insert(0) += 1;
            }
            for term in freqs.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            term_freqs.push(freqs);
        }

        let n = documents.len() as f64;
        let avgdl = doc_lens.iter().sum::<usize>() as f64 / n;
        let idf = compute_idf(&doc_freqs, n, params.epsilon);

        debug!(
            "Built BM25 index: {} documents, {} terms, avgdl={:.2}",
            documents.len(),
            idf.len(),
            avgdl
        );

        Ok(Self {
            params,
            term_freqs,
            doc_lens,
            avgdl,
            idf,
        })
    }

    pub fn len(&self) -> usize {
        self.doc_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lens.is_empty()
    }

    /// Inverse document frequency of `term`, zero when unseen.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Raw score of every document, indexed by corpus position.
    ///
    /// Repeated query tokens count once per occurrence.
    pub fn score(&self, query: &str) -> Vec<(usize, f32)> {
        let tokens = tokenize(query);
        let Bm25Params { k1, b, .. } = self.params;

        self.term_freqs
            .iter()
            .zip(&self.doc_lens)
            .enumerate()
            .map(|(position, (freqs, &dl))| {
                let length_ratio = if self.avgdl > 0.0 {
                    dl as f64 / self.avgdl
                } else {
                    1.0
                };
                let score: f64 = tokens
                    .iter()
                    .map(|t| {
                        let tf = freqs.get(t).copied().unwrap_or(0) as f64;
                        self.idf(t) * (tf * (k1 + 1.0))
                            / (tf + k1 * (1.0 - b + b * length_ratio))
                    })
                    .sum();
                (position, score as f32)
            })
            .collect()
    }
}

/// `ln(N - n + 0.5) - ln(n + 0.5)`, with negative values replaced by
/// `epsilon` times the mean idf over the vocabulary.
fn compute_idf(doc_freqs: &HashMap<String, u32>, n: f64, epsilon: f64) -> HashMap<String, f64> {
    let mut idf = HashMap::with_capacity(doc_freqs.len());
    let mut idf_sum = 0.0;
    let mut negative = Vec::new();

    for (term, &freq) in doc_freqs {
        let freq = freq as f64;
        let value = (n - freq + 0.5).ln() - (freq + 0.5).ln();
        idf_sum += value;
        if value < 0.0 {
            negative.push(term.clone());
        }
        idf.insert(term.clone(), value);
    }

    if !idf.is_empty() {
        let floor = epsilon * idf_sum / idf.len() as f64;
        for term in negative {
            idf.insert(term, floor);
        }
    }
    idf
}

#[cfg(test)]
#[path = "lexical_tests.rs"]
mod tests;
