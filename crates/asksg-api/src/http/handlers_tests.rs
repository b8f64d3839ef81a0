use super::*;
use crate::http::test_support;

async fn state() -> Arc<AppState> {
    Arc::new(AppState::new(test_support::ranker().await))
}

fn request(question: &str, mode: SearchMode) -> SearchRequest {
    SearchRequest {
        question: question.to_string(),
        mode,
        use_remote_embedding: false,
    }
}

#[test]
fn test_search_request_defaults() {
    let req: SearchRequest = serde_json::from_str(r#"{"question": "bus stops"}"#).unwrap();
    assert_eq!(req.question, "bus stops");
    assert_eq!(req.mode, SearchMode::Hybrid);
    assert!(!req.use_remote_embedding);
}

#[test]
fn test_search_request_mode_aliases() {
    let req: SearchRequest =
        serde_json::from_str(r#"{"question": "q", "mode": "keyword"}"#).unwrap();
    assert_eq!(req.mode, SearchMode::Lexical);

    let req: SearchRequest =
        serde_json::from_str(r#"{"question": "q", "mode": "vector"}"#).unwrap();
    assert_eq!(req.mode, SearchMode::Vector);
}

#[tokio::test]
async fn test_keyword_search_ranks_matching_collection_first() {
    let Json(outcome) = search(
        State(state().await),
        Json(request("bus stops", SearchMode::Lexical)),
    )
    .await
    .unwrap();

    assert_eq!(outcome.mode, SearchMode::Lexical);
    assert_eq!(outcome.len(), 3);
    assert_eq!(outcome.results[0].document_id, "c1");
    assert_eq!(outcome.results[0].scores.lexical, Some(1.0));
}

#[tokio::test]
async fn test_hybrid_search_reports_all_components() {
    let Json(outcome) = search(
        State(state().await),
        Json(request("rainfall readings", SearchMode::Hybrid)),
    )
    .await
    .unwrap();

    assert_eq!(outcome.mode, SearchMode::Hybrid);
    assert!(!outcome.is_empty());
    for result in &outcome.results {
        assert!(result.scores.lexical.is_some());
        assert!(result.scores.vector.is_some());
        assert!(result.scores.combined.is_some());
    }
}

#[tokio::test]
async fn test_remote_search_without_remote_provider_fails() {
    let mut req = request("bus", SearchMode::Vector);
    req.use_remote_embedding = true;

    let err = search(State(state().await), Json(req)).await.unwrap_err();
    assert!(err.to_string().contains("remote embedding is not configured"));
}

#[tokio::test]
async fn test_remote_search_uses_remote_ranker() {
    let local = test_support::ranker().await;
    let remote = local.clone();
    let state = Arc::new(AppState::new(local).with_remote(remote));

    let mut req = request("bus stops", SearchMode::Lexical);
    req.use_remote_embedding = true;

    let Json(outcome) = search(State(state), Json(req)).await.unwrap();
    assert_eq!(outcome.results[0].document_id, "c1");
}

#[tokio::test]
async fn test_ask_lists_sources_in_rank_order() {
    let Json(response) = ask(
        State(state().await),
        Json(AskRequest {
            question: "bus stops".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.sources.len(), 3);
    assert!(response.visualization_data.is_none());
    assert!(response.text_response.contains("bus stops"));
    for source in &response.sources {
        assert!(response.text_response.contains(source.as_str()));
    }
}

#[test]
fn test_render_answer_without_results() {
    let outcome = SearchOutcome::new(Vec::new(), SearchMode::Hybrid);
    let text = render_answer("parking", &outcome);
    assert!(text.starts_with("No matching collections"));
    assert!(text.contains("parking"));
}

#[test]
fn test_ask_response_serializes_null_visualization() {
    let response = AskResponse {
        text_response: "answer".to_string(),
        visualization_data: None,
        sources: vec!["c1".to_string()],
    };
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["visualization_data"].is_null());
    assert_eq!(json["sources"][0], "c1");
}
