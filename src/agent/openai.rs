// PromptForge OpenAI Client
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Standard OpenAI-compatible Chat Completion call. Any server speaking the
// same dialect works by pointing OPENAI_API_URL at it.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::agent::provider::{GenerationRequest, ProviderError, TextGenerator};
use crate::config::EndpointConfig;

pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            api_key: endpoint.api_key.clone().unwrap_or_default(),
            api_url: endpoint.base_url.trim_end_matches('/').to_string(),
            model: endpoint.model.clone(),
        }
    }

    fn payload(&self, request: &GenerationRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.prompt }));

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_output_tokens,
        })
    }
}

/// Extract content from `choices[0].message.content`.
pub fn extract_text(body: &Value) -> Result<String, ProviderError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(ProviderError::EmptyResponse)
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        info!("[LLM] Chat completion with {}", self.model);

        let endpoint = format!("{}/chat/completions", self.api_url);
        let resp = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.payload(&request))
            .send()
            .await
            .map_err(|e| {
                error!("[LLM] OpenAI connection failed: {}", e);
                ProviderError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;
        extract_text(&body)
    }
}
