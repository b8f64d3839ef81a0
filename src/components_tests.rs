use super::*;
use crate::cmd_index::build_index;
use crate::test_support::fixture_config;
use asksg_protocols::SearchMode;

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.search.top_k, 5);
}

#[test]
fn test_load_config_rejects_invalid_weights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[search]\nlexical_weight = 0.6\nvector_weight = 0.6\n").unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn test_load_config_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asksg.toml");
    std::fs::write(&path, "[server]\nport = 9001\n\n[search]\ntop_k = 7\n").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.server.port, 9001);
    assert_eq!(config.search.top_k, 7);
}

#[test]
fn test_local_embedder_hash() {
    let mut config = EmbeddingConfig::default();
    config.hash_dimension = 24;

    let embedder = local_embedder(&config).unwrap();
    assert_eq!(embedder.id(), "hash");
    assert_eq!(embedder.dimension(), 24);
}

#[test]
fn test_local_embedder_unknown_falls_back_to_hash() {
    let mut config = EmbeddingConfig::default();
    config.local = "word2vec".to_string();

    assert_eq!(local_embedder(&config).unwrap().id(), "hash");
}

#[cfg(not(feature = "local-embeddings"))]
#[test]
fn test_local_embedder_fastembed_without_feature_is_an_error() {
    let mut config = EmbeddingConfig::default();
    config.local = "fastembed".to_string();

    let err = local_embedder(&config).err().unwrap();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "embedding.local"));
}

#[test]
fn test_remote_embedder_uses_configured_dimension() {
    let config = RemoteEmbeddingConfig {
        dimension: 16,
        token: Some("hf_test".to_string()),
        ..RemoteEmbeddingConfig::default()
    };

    let embedder = remote_embedder(&config).unwrap();
    assert_eq!(embedder.id(), "remote");
    assert_eq!(embedder.dimension(), 16);
}

#[test]
fn test_ranker_config_from_search_section() {
    let mut search = SearchConfig::default();
    search.lexical_weight = 0.3;
    search.vector_weight = 0.7;
    search.top_k = 9;
    search.candidate_multiplier = 3;
    search.embedding_timeout_seconds = 4;

    let ranker = ranker_config(&search);
    assert_eq!(ranker.lexical_weight, 0.3);
    assert_eq!(ranker.vector_weight, 0.7);
    assert_eq!(ranker.top_k, 9);
    assert_eq!(ranker.candidate_multiplier, 3);
    assert_eq!(ranker.embedding_timeout, std::time::Duration::from_secs(4));
}

#[tokio::test]
async fn test_build_state_serves_queries() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    build_index(&config, false).await.unwrap();

    let state = build_state(&config).unwrap();
    assert!(state.remote().is_none());
    assert_eq!(state.local().corpus().len(), 5);

    let outcome = state
        .ranker(false)
        .unwrap()
        .search("bus stops", SearchMode::Lexical)
        .await
        .unwrap();
    assert_eq!(outcome.len(), 3);
    assert_eq!(outcome.results[0].document_id, "101");

    let hybrid = state
        .local()
        .search("bus stops", SearchMode::Hybrid)
        .await
        .unwrap();
    assert!(hybrid.len() <= 3);
    assert!(!hybrid.is_empty());
}

#[tokio::test]
async fn test_build_state_without_index_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());

    assert!(build_state(&config).is_err());
}

#[tokio::test]
async fn test_build_state_with_remote_provider() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());
    build_index(&config, false).await.unwrap();

    config.embedding.remote = Some(RemoteEmbeddingConfig {
        endpoint: "http://127.0.0.1:9/embed".to_string(),
        dimension: 16,
        ..RemoteEmbeddingConfig::default()
    });

    let state = build_state(&config).unwrap();
    assert_eq!(state.remote().unwrap().embedder_id(), "remote");
}

#[tokio::test]
async fn test_build_state_rejects_remote_dimension_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());
    build_index(&config, false).await.unwrap();

    config.embedding.remote = Some(RemoteEmbeddingConfig {
        dimension: 384,
        ..RemoteEmbeddingConfig::default()
    });

    let err = build_state(&config).err().unwrap();
    assert!(err.to_string().to_lowercase().contains("dimension"));
}

#[tokio::test]
async fn test_build_state_rejects_index_from_another_embedder() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());

    // Same dimension as the configured hash provider, different model.
    let mut index = FlatIndex::new(config.embedding.hash_dimension)
        .unwrap()
        .with_embedder("fastembed");
    for _ in 0..5 {
        index.add(&vec![0.25; config.embedding.hash_dimension]).unwrap();
    }
    index.save(&config.index.vector_index_path).unwrap();

    let err = build_state(&config).err().unwrap();
    assert!(err.to_string().contains("'fastembed'"));
}
