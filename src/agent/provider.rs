// PromptForge Text Generation Bridge
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// The seam between the service and whichever hosted model answers it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{AppConfig, ConfigError, ProviderChoice};

/// A single non-streaming generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Rate limit or quota exceeded")]
    RateLimit,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("No response from AI")]
    EmptyResponse,
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Classify a non-success HTTP answer.
    pub fn from_status(status: u16, body: String) -> Self {
        let lower = body.to_lowercase();
        if status == 429 || lower.contains("quota") || lower.contains("rate limit") {
            ProviderError::RateLimit
        } else {
            ProviderError::Http { status, body }
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short backend name reported in metadata and `/health`.
    fn name(&self) -> &str;

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError>;
}

pub type SharedGenerator = Arc<dyn TextGenerator>;

/// Build the configured backend, or `None` when running offline.
pub fn from_config(config: &AppConfig) -> Result<Option<SharedGenerator>, ConfigError> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ConfigError::InvalidValue {
            key: "PROMPTFORGE_TIMEOUT_SECS",
            value: e.to_string(),
        })?;

    let generator: Option<SharedGenerator> = match config.resolved_provider()? {
        ProviderChoice::Gemini => Some(Arc::new(crate::agent::gemini::GeminiClient::new(
            http,
            &config.gemini,
        ))),
        ProviderChoice::OpenAi => Some(Arc::new(crate::agent::openai::OpenAiClient::new(
            http,
            &config.openai,
        ))),
        ProviderChoice::None | ProviderChoice::Auto => None,
    };
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ProviderError::from_status(429, String::new()),
            ProviderError::RateLimit
        ));
        assert!(matches!(
            ProviderError::from_status(403, "Quota exceeded for project".into()),
            ProviderError::RateLimit
        ));
        assert!(matches!(
            ProviderError::from_status(500, "boom".into()),
            ProviderError::Http { status: 500, .. }
        ));
    }

    #[test]
    fn test_offline_config_builds_no_generator() {
        let cfg = AppConfig::default();
        assert!(from_config(&cfg).unwrap().is_none());
    }
}
