use super::*;
use crate::http::test_support;

#[test]
fn test_health_status_serialization() {
    assert_eq!(serde_json::to_string(&HealthStatus::Ok).unwrap(), "\"ok\"");
    assert_eq!(
        serde_json::to_string(&HealthStatus::Degraded).unwrap(),
        "\"degraded\""
    );
    assert_eq!(
        serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
        "\"unhealthy\""
    );
}

#[test]
fn test_component_health_skips_missing_message() {
    let component = ComponentHealth {
        name: "corpus".to_string(),
        status: HealthStatus::Ok,
        message: None,
    };
    let json = serde_json::to_string(&component).unwrap();
    assert!(!json.contains("message"));
}

#[tokio::test]
async fn test_health_check_reports_components() {
    let state = Arc::new(AppState::new(test_support::ranker().await));
    let Json(health) = health_check(State(state)).await;

    assert_eq!(health.status, HealthStatus::Ok);
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

    let names: Vec<&str> = health.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["corpus", "vector_index", "embedding_local"]);
    assert_eq!(health.components[0].message.as_deref(), Some("4 collections"));
    assert_eq!(
        health.components[1].message.as_deref(),
        Some(format!("dimension {}", test_support::DIMENSION).as_str())
    );
    assert_eq!(health.components[2].message.as_deref(), Some("hash"));
}

#[tokio::test]
async fn test_health_check_includes_remote_when_configured() {
    let local = test_support::ranker().await;
    let state = Arc::new(AppState::new(local.clone()).with_remote(local));
    let Json(health) = health_check(State(state)).await;

    assert_eq!(health.components.len(), 4);
    assert_eq!(health.components[3].name, "embedding_remote");
}

#[tokio::test]
async fn test_readiness_check() {
    let Json(body) = readiness_check().await;
    assert_eq!(body["status"], "ready");
}
