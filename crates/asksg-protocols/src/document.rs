//! Corpus document definitions.
//!
//! A document's position in the corpus is its identity inside the indices:
//! the lexical index and the vector index are both built in corpus order.

use serde::{Deserialize, Serialize};

/// Text substituted when a snapshot record carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// A single collection in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, unique within the corpus.
    pub id: String,

    /// Collection title.
    pub title: String,

    /// Collection description.
    pub description: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Text fed to the lexical index.
    pub fn lexical_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Text fed to the embedding provider when the vector index is built.
    pub fn embedding_text(&self) -> String {
        format!("Name: {} \nDescription: {}", self.title, self.description)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
