use super::*;

fn corpus() -> Vec<Document> {
    vec![
        Document::new("1", "Transport", "bus routes"),
        Document::new("2", "Weather", "rainfall data"),
        Document::new("3", "Bus", "stops bus data"),
    ]
}

fn score_of(scores: &[(usize, f32)], position: usize) -> f32 {
    scores.iter().find(|(p, _)| *p == position).map(|(_, s)| *s).unwrap()
}

#[test]
fn test_tokenize_lowercases_and_splits_whitespace() {
    assert_eq!(
        tokenize("  Bus\tRoutes\nSINGAPORE "),
        vec!["bus", "routes", "singapore"]
    );
    assert!(tokenize("   ").is_empty());
}

#[test]
fn test_new_rejects_empty_corpus() {
    assert!(matches!(Bm25Index::new(&[]), Err(SearchError::EmptyCorpus)));
}

#[test]
fn test_params_default() {
    let params = Bm25Params::default();
    assert_eq!(params.k1, 1.5);
    assert_eq!(params.b, 0.75);
    assert_eq!(params.epsilon, 0.25);
}

#[test]
fn test_idf_positive_for_rare_terms() {
    let index = Bm25Index::new(&corpus()).unwrap();
    let expected = (5.0f64 / 3.0).ln();
    assert!((index.idf("transport") - expected).abs() < 1e-9);
    assert_eq!(index.idf("unknown"), 0.0);
}

#[test]
fn test_negative_idf_floored_by_epsilon_average() {
    let index = Bm25Index::new(&corpus()).unwrap();
    // 5 terms with idf ln(5/3), 2 with -ln(5/3); mean is 3/7 ln(5/3)
    let floor = 0.25 * (5.0f64 / 3.0).ln() * 3.0 / 7.0;
    assert!((index.idf("bus") - floor).abs() < 1e-9);
    assert!((index.idf("data") - floor).abs() < 1e-9);
}

#[test]
fn test_score_matches_okapi_formula() {
    let index = Bm25Index::new(&corpus()).unwrap();
    let scores = index.score("Transport");

    let avgdl = 10.0 / 3.0;
    let denom = 1.0 + 1.5 * (1.0 - 0.75 + 0.75 * 3.0 / avgdl);
    let expected = (5.0f64 / 3.0).ln() * 2.5 / denom;

    assert_eq!(scores.len(), 3);
    assert!((score_of(&scores, 0) as f64 - expected).abs() < 1e-5);
    assert_eq!(score_of(&scores, 1), 0.0);
    assert_eq!(score_of(&scores, 2), 0.0);
}

#[test]
fn test_score_counts_repeated_query_tokens() {
    let index = Bm25Index::new(&corpus()).unwrap();
    let once = score_of(&index.score("transport"), 0);
    let twice = score_of(&index.score("transport transport"), 0);
    assert!((twice - 2.0 * once).abs() < 1e-5);
}

#[test]
fn test_score_term_frequency_saturates() {
    let index = Bm25Index::new(&corpus()).unwrap();
    let scores = index.score("bus");
    // Document 3 holds "bus" twice but is also longer
    assert!(score_of(&scores, 2) > score_of(&scores, 0));
    assert!(score_of(&scores, 2) < 2.0 * score_of(&scores, 0));
}

#[test]
fn test_empty_query_scores_zero() {
    let index = Bm25Index::new(&corpus()).unwrap();
    let scores = index.score("");
    assert_eq!(scores.len(), 3);
    assert!(scores.iter().all(|(_, s)| *s == 0.0));
}

#[test]
fn test_unknown_terms_score_zero() {
    let index = Bm25Index::new(&corpus()).unwrap();
    assert!(index.score("zebra").iter().all(|(_, s)| *s == 0.0));
}

#[test]
fn test_half_split_terms_have_zero_idf() {
    let docs = vec![
        Document::new("1", "Transport", "bus routes"),
        Document::new("2", "Weather", "rainfall data"),
    ];
    let index = Bm25Index::new(&docs).unwrap();
    assert_eq!(index.idf("bus"), 0.0);
    assert!(index.score("bus routes").iter().all(|(_, s)| *s == 0.0));
}

#[test]
fn test_documents_without_tokens() {
    let docs = vec![Document::new("1", "", ""), Document::new("2", " ", "")];
    let index = Bm25Index::new(&docs).unwrap();
    let scores = index.score("anything");
    assert!(scores.iter().all(|(_, s)| s.is_finite() && *s == 0.0));
}

#[test]
fn test_len() {
    let index = Bm25Index::new(&corpus()).unwrap();
    assert_eq!(index.len(), 3);
    assert!(!index.is_empty());
}
