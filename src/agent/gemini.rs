// PromptForge Gemini Client
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::agent::provider::{GenerationRequest, ProviderError, TextGenerator};
use crate::config::EndpointConfig;

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            api_key: endpoint.api_key.clone().unwrap_or_default(),
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            model: endpoint.model.clone(),
        }
    }

    fn payload(request: &GenerationRequest) -> Value {
        let mut payload = json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": request.max_output_tokens,
            }
        });
        if let Some(system) = &request.system {
            payload["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }
        payload
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_text(body: &Value) -> Result<String, ProviderError> {
    body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or(ProviderError::EmptyResponse)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        info!("[LLM] Gemini generateContent ({})", self.model);

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::payload(&request))
            .send()
            .await
            .map_err(|e| {
                error!("[LLM] Gemini connection failed: {}", e);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let req = GenerationRequest::new("hello").with_system("be brief");
        let p = GeminiClient::payload(&req);
        assert_eq!(p["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(p["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(p["systemInstruction"]["parts"][0]["text"], "be brief");
    }

    #[test]
    fn test_extract_text() {
        let body = json!({"candidates":[{"content":{"parts":[{"text":"ok"}]}}]});
        assert_eq!(extract_text(&body).unwrap(), "ok");
        assert!(matches!(
            extract_text(&json!({"candidates": []})),
            Err(ProviderError::EmptyResponse)
        ));
    }
}
