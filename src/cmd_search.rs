//! `search` subcommand: one query from the command line.

use std::error::Error;

use asksg_config::Config;
use asksg_protocols::{SearchMode, SearchOutcome};

use crate::components::build_state;

/// Run one query against the configured indices and print the outcome.
pub(crate) async fn run_search(
    config: &Config,
    query: &str,
    mode: SearchMode,
    use_remote: bool,
    format: &str,
) -> Result<(), Box<dyn Error>> {
    let state = build_state(config)?;
    let outcome = state.ranker(use_remote)?.search(query, mode).await?;
    println!("{}", render(&outcome, format)?);
    Ok(())
}

fn render(outcome: &SearchOutcome, format: &str) -> Result<String, Box<dyn Error>> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    if outcome.is_empty() {
        return Ok("No collections found.".to_string());
    }

    let mut lines = vec![
        format!(
            "{:<4} {:<20} {:<40} {:>8} {:>8} {:>8}",
            "#", "ID", "TITLE", "KEYWORD", "VECTOR", "SCORE"
        ),
        "-".repeat(92),
    ];
    for (rank, result) in outcome.results.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<20} {:<40} {:>8} {:>8} {:>8.4}",
            rank + 1,
            result.document_id,
            truncate(&result.title, 40),
            score_cell(result.scores.lexical),
            score_cell(result.scores.vector),
            result.scores.ranking_score()
        ));
    }
    lines.push(format!("method: {}", outcome.mode));
    Ok(lines.join("\n"))
}

fn score_cell(score: Option<f32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:.4}", s))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
