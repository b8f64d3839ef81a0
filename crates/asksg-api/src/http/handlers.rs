//! Search API handlers.

use std::fmt::Write;
use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use asksg_protocols::{SearchMode, SearchOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Request to search the collection catalogue.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Natural-language question.
    pub question: String,

    /// Ranking mode. Defaults to hybrid.
    #[serde(default)]
    pub mode: SearchMode,

    /// Embed the question with the remote provider instead of the local one.
    #[serde(default)]
    pub use_remote_embedding: bool,
}

/// Request to answer a question.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Answer to a question.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub text_response: String,

    /// Always null for now.
    pub visualization_data: Option<serde_json::Value>,

    /// Identifiers of the collections the answer draws on.
    pub sources: Vec<String>,
}

/// Search collections.
///
/// POST /search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchOutcome>, ApiError> {
    info!(
        "Search request: mode={}, remote={}, question_len={}",
        req.mode,
        req.use_remote_embedding,
        req.question.len()
    );

    let ranker = state.ranker(req.use_remote_embedding)?;
    let outcome = ranker.search(&req.question, req.mode).await?;
    Ok(Json(outcome))
}

/// Answer a question by listing the best matching collections.
///
/// POST /ask
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    info!("Ask request: question_len={}", req.question.len());

    let outcome = state
        .local()
        .search(&req.question, SearchMode::Hybrid)
        .await?;

    Ok(Json(AskResponse {
        text_response: render_answer(&req.question, &outcome),
        visualization_data: None,
        sources: outcome
            .document_ids()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

fn render_answer(question: &str, outcome: &SearchOutcome) -> String {
    if outcome.is_empty() {
        return format!("No matching collections found for \"{}\".", question);
    }

    let mut text = format!("Collections relevant to \"{}\":", question);
    for (rank, result) in outcome.results.iter().enumerate() {
        let _ = write!(
            text,
            "\n{}. {} ({}): {}",
            rank + 1,
            result.title,
            result.document_id,
            result.description
        );
    }
    text
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
