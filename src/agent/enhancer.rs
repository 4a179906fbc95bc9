// PromptForge Enhancer - Request Orchestration
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// classify -> compose -> model call (or local fill) -> score -> result.
// The only stateful piece is the optional model handle it was built with.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::agent::provider::{GenerationRequest, ProviderError, SharedGenerator};
use crate::config::FallbackPolicy;
use crate::engine::fallback::{batch_enhancement, fallback_enhancement};
use crate::engine::media::{system_prompt, MediaPromptRequest, MediaPromptResponse};
use crate::engine::quality::{token_estimate, word_count, TextMetrics};
use crate::engine::request::{BatchEnhancementRequest, MAX_PROMPT_CHARS};
use crate::engine::{classify, compose, Category, EnhancementRequest, TargetLength};
use crate::error::ApiError;

pub const FALLBACK_SOURCE: &str = "fallback";

#[derive(Debug, Clone, Serialize)]
pub struct EnhancementMetadata {
    pub tone: String,
    pub include_examples: bool,
    pub target_length: TargetLength,
    pub enhancement_template_used: Category,
    /// Backend that produced the text, or "fallback".
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhancedResult {
    pub id: String,
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub category: Category,
    pub metadata: EnhancementMetadata,
    pub created_at: String,
    pub word_count: usize,
    pub token_estimate: usize,
    pub quality_score: f64,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub original: String,
    pub enhanced: String,
    pub category: Category,
    pub word_count: usize,
    pub token_estimate: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub batch_id: String,
    pub processed_count: usize,
    pub results: Vec<BatchItem>,
    pub timestamp: String,
}

pub struct PromptEnhancer {
    generator: Option<SharedGenerator>,
    policy: FallbackPolicy,
}

impl PromptEnhancer {
    pub fn new(generator: Option<SharedGenerator>, policy: FallbackPolicy) -> Self {
        Self { generator, policy }
    }

    /// Name of the configured backend, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.name())
    }

    pub fn model_ready(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn enhance(&self, request: EnhancementRequest) -> Result<EnhancedResult, ApiError> {
        request.validate()?;

        let category = request
            .category
            .unwrap_or_else(|| classify(&request.prompt));
        info!("[ENHANCE] Category: {} (explicit: {})", category, request.category.is_some());

        let composite = compose(category, &request);
        let (text, source) = self.generate_or_fallback(category, &request.prompt, composite).await?;

        let enhanced_prompt = text.trim().to_string();
        let metrics = TextMetrics::measure(&enhanced_prompt);

        Ok(EnhancedResult {
            id: short_id(),
            original_prompt: request.prompt,
            enhanced_prompt,
            category,
            metadata: EnhancementMetadata {
                tone: request.tone,
                include_examples: request.include_examples,
                target_length: request.target_length,
                enhancement_template_used: category,
                source,
            },
            created_at: now_rfc3339(),
            word_count: metrics.word_count,
            token_estimate: metrics.token_estimate,
            quality_score: metrics.quality_score,
            status: "success",
        })
    }

    async fn generate_or_fallback(
        &self,
        category: Category,
        prompt: &str,
        composite: String,
    ) -> Result<(String, String), ApiError> {
        let Some(generator) = self.generator.as_deref() else {
            return match self.policy {
                FallbackPolicy::Degrade => {
                    info!("[ENHANCE] No model configured. Using local template fill.");
                    Ok((fallback_enhancement(category, prompt), FALLBACK_SOURCE.to_string()))
                }
                FallbackPolicy::Fail => Err(ApiError::Unavailable),
            };
        };

        let answer = generator
            .generate(GenerationRequest::new(composite))
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(ProviderError::EmptyResponse)
                } else {
                    Ok(text)
                }
            });

        match (answer, self.policy) {
            (Ok(text), _) => Ok((text, generator.name().to_string())),
            (Err(e), FallbackPolicy::Degrade) => {
                warn!("[ENHANCE] ⚠️ Using fallback enhancement: {}", e);
                Ok((fallback_enhancement(category, prompt), FALLBACK_SOURCE.to_string()))
            }
            (Err(e), FallbackPolicy::Fail) => Err(ApiError::Provider(e)),
        }
    }

    /// Enhance many prompts with the quick local fill. Never calls a model.
    pub fn enhance_batch(&self, request: BatchEnhancementRequest) -> Result<BatchResult, ApiError> {
        request.validate()?;

        if let Some((idx, _)) = request.prompts.iter().enumerate().find(|(_, p)| {
            let len = p.chars().count() as u64;
            len == 0 || len > MAX_PROMPT_CHARS
        }) {
            return Err(ApiError::Validation(format!(
                "prompts[{}]: length must be between 1 and {} characters",
                idx, MAX_PROMPT_CHARS
            )));
        }

        let results: Vec<BatchItem> = request
            .prompts
            .into_iter()
            .map(|prompt| {
                let category = request.category.unwrap_or_else(|| classify(&prompt));
                let enhanced = batch_enhancement(category, &prompt);
                BatchItem {
                    word_count: word_count(&enhanced),
                    token_estimate: token_estimate(&enhanced),
                    original: prompt,
                    enhanced,
                    category,
                }
            })
            .collect();

        info!("[ENHANCE] Batch processed {} prompts", results.len());

        Ok(BatchResult {
            batch_id: short_id(),
            processed_count: results.len(),
            results,
            timestamp: now_rfc3339(),
        })
    }

    /// One-shot image / video / text prompt generation. Requires a model.
    pub async fn generate_media_prompt(
        &self,
        request: MediaPromptRequest,
    ) -> Result<MediaPromptResponse, ApiError> {
        request.validate()?;

        let generator = self.generator.as_deref().ok_or(ApiError::Unavailable)?;
        let gen_request = GenerationRequest::new(request.user_prompt.clone())
            .with_system(system_prompt(request.prompt_type, request.quality))
            .with_temperature(0.8);

        let text = generator.generate(gen_request).await?;

        Ok(MediaPromptResponse {
            input: request.user_prompt,
            kind: request.prompt_type,
            quality: request.quality,
            professional_prompt: text.trim().to_string(),
        })
    }
}

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
