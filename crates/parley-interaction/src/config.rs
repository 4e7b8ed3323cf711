//! Environment-based configuration.
//!
//! Process configuration (API credential, endpoint, model name) is read
//! from the environment at startup. A missing credential is a fatal
//! startup condition surfaced by the binary, not a core-logic concern.

use parley_core::error::{ParleyError, Result};
use std::env;

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model name (served through an OpenAI-compatible endpoint).
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Completion API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer credential for the completion API
    pub api_key: String,
    /// OpenAI-compatible base URL (no trailing slash)
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl ApiConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `PARLEY_API_KEY` (falling back to `OPENAI_API_KEY`) - required
    /// - `PARLEY_BASE_URL` - defaults to the OpenAI endpoint
    /// - `PARLEY_MODEL_NAME` - defaults to `gemini-2.5-flash`
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::Config` when no API key is set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PARLEY_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .map_err(|_| {
                ParleyError::config(
                    "PARLEY_API_KEY (or OPENAI_API_KEY) must be set in the environment",
                )
            })?;

        let base_url = env::var("PARLEY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("PARLEY_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Creates a config with explicit values, defaulting endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_defaults() {
        let config = ApiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::new("key")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }
}
