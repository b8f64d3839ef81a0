//! Hosted feature-extraction embedding provider.

use std::time::Duration;

use async_trait::async_trait;
use asksg_protocols::{Embedding, EmbeddingError, EmbeddingProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::retry::{RetryConfig, is_retryable_status, with_retry};

/// Connection settings for [`RemoteEmbedding`].
#[derive(Debug, Clone)]
pub struct RemoteEmbeddingOptions {
    pub endpoint: String,
    pub token: Option<String>,
    pub dimension: usize,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
}

impl RemoteEmbeddingOptions {
    pub fn new(endpoint: impl Into<String>, dimension: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            dimension,
            request_timeout: Duration::from_secs(20),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

#[derive(Debug, Serialize)]
struct FeatureExtractionRequest<'a> {
    inputs: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureExtractionResponse {
    Batch(Vec<Vec<f32>>),
    Single(Vec<f32>),
    Error {
        error: String,
        #[serde(default)]
        estimated_time: Option<f64>,
    },
}

/// Embeds text by calling a hosted feature-extraction endpoint.
pub struct RemoteEmbedding {
    client: Client,
    options: RemoteEmbeddingOptions,
}

impl RemoteEmbedding {
    pub fn new(options: RemoteEmbeddingOptions) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| EmbeddingError::Unavailable(e.to_string()))?;
        Ok(Self { client, options })
    }

    pub fn endpoint(&self) -> &str {
        &self.options.endpoint
    }

    /// One HTTP round trip, classified for the retry loop.
    async fn request_once(&self, inputs: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut request = self
            .client
            .post(&self.options.endpoint)
            .json(&FeatureExtractionRequest { inputs });
        if let Some(token) = &self.options.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                EmbeddingError::Timeout(self.options.request_timeout)
            } else {
                EmbeddingError::Unavailable(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!("HTTP {}: {}", status.as_u16(), body);
            return Err(if is_retryable_status(status.as_u16()) {
                EmbeddingError::Unavailable(message)
            } else {
                EmbeddingError::Failed(message)
            });
        }

        let parsed: FeatureExtractionResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Failed(format!("unexpected response: {}", e)))?;

        match parsed {
            FeatureExtractionResponse::Batch(vectors) => Ok(vectors),
            FeatureExtractionResponse::Single(vector) => Ok(vec![vector]),
            FeatureExtractionResponse::Error {
                error,
                estimated_time,
            } => {
                warn!(
                    "Embedding endpoint not ready: {} (estimated {:?}s)",
                    error, estimated_time
                );
                Err(EmbeddingError::Unavailable(error))
            }
        }
    }

    fn check_vector(&self, vector: Vec<f32>) -> Result<Embedding, EmbeddingError> {
        if vector.len() != self.options.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.options.dimension,
                actual: vector.len(),
            });
        }
        Ok(Embedding::new(vector))
    }
}

#[async_trait]
impl EmbeddingProvider for RemoteEmbedding {
    fn id(&self) -> &str {
        "remote"
    }

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        debug!("Remote embedding: {} chars", text.len());
        let inputs = [text];
        let vectors = with_retry(&self.options.retry, "Embedding endpoint", || {
            self.request_once(&inputs)
        })
        .await?;

        let first = vectors
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::Failed("endpoint returned no vectors".to_string()))?;
        self.check_vector(first)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = with_retry(&self.options.retry, "Embedding endpoint", || {
            self.request_once(texts)
        })
        .await?;

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::Failed(format!(
                "endpoint returned {} vectors for {} inputs",
                vectors.len(),
                texts.len()
            )));
        }
        vectors.into_iter().map(|v| self.check_vector(v)).collect()
    }

    fn dimension(&self) -> usize {
        self.options.dimension
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
