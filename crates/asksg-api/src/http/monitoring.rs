//! Monitoring and health check handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// Health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy.
    Ok,
    /// Service is degraded but functional.
    Degraded,
    /// Service is unhealthy.
    Unhealthy,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: HealthStatus,
    /// Version information.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Component health checks.
    pub components: Vec<ComponentHealth>,
}

/// Component health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name.
    pub name: String,
    /// Component status.
    pub status: HealthStatus,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    fn ok(name: &str, message: String) -> Self {
        Self {
            name: name.to_string(),
            status: HealthStatus::Ok,
            message: Some(message),
        }
    }
}

/// Health check handler.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let local = state.local();
    let mut components = vec![
        ComponentHealth::ok("corpus", format!("{} collections", local.corpus().len())),
        ComponentHealth::ok("vector_index", format!("dimension {}", local.dimension())),
        ComponentHealth::ok("embedding_local", local.embedder_id().to_string()),
    ];
    if let Some(remote) = state.remote() {
        components.push(ComponentHealth::ok(
            "embedding_remote",
            remote.embedder_id().to_string(),
        ));
    }

    let overall_status = if components.iter().any(|c| c.status == HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else if components.iter().any(|c| c.status == HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Ok
    };

    Json(HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        components,
    })
}

/// Readiness check. Indices are built before the listener binds.
pub async fn readiness_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready"
    }))
}

#[cfg(test)]
#[path = "monitoring_tests.rs"]
mod tests;
