//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, LOCAL_PROVIDERS};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

/// Tolerance for the weight-sum check.
const WEIGHT_TOLERANCE: f32 = 0.001;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_index(config, &mut result);
        Self::validate_search(config, &mut result);
        Self::validate_embedding(config, &mut result);

        Ok(result)
    }

    /// Validate and turn the first error into a `ConfigError`.
    pub fn ensure_valid(config: &Config) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config)?;
        if let Some(err) = result.errors.first() {
            return Err(ConfigError::InvalidValue {
                field: err.path.clone(),
                message: err.message.clone(),
            });
        }
        Ok(result)
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new(
                "server.host",
                "Host cannot be empty",
            ));
        }
    }

    fn validate_index(config: &Config, result: &mut ValidationResult) {
        if config.index.build_batch_size == 0 {
            result.add_error(ValidationError::new(
                "index.build_batch_size",
                "build_batch_size must be greater than 0",
            ));
        }
    }

    fn validate_search(config: &Config, result: &mut ValidationResult) {
        let search = &config.search;

        if search.lexical_weight < 0.0 || search.vector_weight < 0.0 {
            result.add_error(ValidationError::new(
                "search",
                "Weights cannot be negative",
            ));
        }

        let sum = search.lexical_weight + search.vector_weight;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            result.add_error(ValidationError::new(
                "search",
                format!(
                    "lexical_weight + vector_weight must equal 1.0, got {}",
                    sum
                ),
            ));
        }

        if search.top_k == 0 {
            result.add_error(ValidationError::new(
                "search.top_k",
                "top_k must be greater than 0",
            ));
        }

        if search.candidate_multiplier == 0 {
            result.add_error(ValidationError::new(
                "search.candidate_multiplier",
                "candidate_multiplier must be greater than 0",
            ));
        }

        if search.embedding_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "search.embedding_timeout_seconds",
                "embedding_timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_embedding(config: &Config, result: &mut ValidationResult) {
        let embedding = &config.embedding;

        if !LOCAL_PROVIDERS.contains(&embedding.local.as_str()) {
            result.add_warning(ValidationWarning::new(
                "embedding.local",
                format!(
                    "Unknown local provider '{}', valid values: {:?}; falling back to hash",
                    embedding.local, LOCAL_PROVIDERS
                ),
            ));
        }

        if embedding.hash_dimension == 0 {
            result.add_error(ValidationError::new(
                "embedding.hash_dimension",
                "hash_dimension must be greater than 0",
            ));
        }

        if let Some(ref remote) = embedding.remote {
            if !remote.endpoint.starts_with("http://") && !remote.endpoint.starts_with("https://")
            {
                result.add_error(ValidationError::new(
                    "embedding.remote.endpoint",
                    "endpoint must start with http:// or https://",
                ));
            }

            if remote.token.as_deref().is_none_or(str::is_empty) {
                result.add_warning(ValidationWarning::new(
                    "embedding.remote.token",
                    "Token is not set, the inference endpoint may reject requests",
                ));
            }

            if remote.dimension == 0 {
                result.add_error(ValidationError::new(
                    "embedding.remote.dimension",
                    "dimension must be greater than 0",
                ));
            }

            if remote.request_timeout_seconds == 0 {
                result.add_error(ValidationError::new(
                    "embedding.remote.request_timeout_seconds",
                    "request_timeout_seconds must be greater than 0",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
