//! In-memory collection catalogue in stable corpus order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use asksg_protocols::{CorpusError, DESCRIPTION_PLACEHOLDER, Document};
use serde::Deserialize;
use tracing::{info, warn};

/// Identifier as it appears in catalogue exports: string or integer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(i64),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Text(s) => s,
            RecordId::Number(n) => n.to_string(),
        }
    }
}

/// One snapshot record. Accepts catalogue field names as aliases.
#[derive(Debug, Deserialize)]
struct CollectionRecord {
    #[serde(alias = "collectionId")]
    id: RecordId,
    #[serde(alias = "name")]
    title: String,
    #[serde(default)]
    description: Option<String>,
}

/// Immutable document sequence. Position `i` is the join key with vector `i`.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl CorpusStore {
    /// Build a store, rejecting duplicate identifiers.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CorpusError> {
        let mut positions = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if positions.insert(doc.id.clone(), position).is_some() {
                return Err(CorpusError::DuplicateDocument(doc.id.clone()));
            }
        }
        Ok(Self {
            documents,
            positions,
        })
    }

    /// Load a JSON array of collection records.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        info!(
            "Loaded {} collections from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse a JSON array of collection records.
    pub fn from_json(content: &str) -> Result<Self, CorpusError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(content)?;

        let mut documents = Vec::with_capacity(records.len());
        for (position, value) in records.into_iter().enumerate() {
            let record: CollectionRecord =
                serde_json::from_value(value).map_err(|e| CorpusError::InvalidRecord {
                    position,
                    message: e.to_string(),
                })?;
            documents.push(record_to_document(record));
        }

        Self::from_documents(documents)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at corpus position `position`.
    pub fn get(&self, position: usize) -> Option<&Document> {
        self.documents.get(position)
    }

    /// Corpus position of the document with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}

fn record_to_document(record: CollectionRecord) -> Document {
    let id = record.id.into_string();
    let description = match record.description {
        Some(d) => d,
        None => {
            warn!("Collection {} has no description, using placeholder", id);
            DESCRIPTION_PLACEHOLDER.to_string()
        }
    };
    Document::new(id, record.title, description)
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
