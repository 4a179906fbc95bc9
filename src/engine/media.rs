// PromptForge Media Prompt Profiles
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// System instructions for the one-shot image / video / text prompt generator.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    Image,
    Video,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Short,
    #[default]
    Medium,
    Ultra,
}

impl PromptKind {
    fn system_text(&self) -> &'static str {
        match self {
            PromptKind::Image => "You are an expert AI image prompt engineer.
Convert simple ideas into professional, cinematic, high-quality image prompts.
Automatically add subject detail, environment, lighting, camera, realism, style, and quality.
Do not explain anything. Output only the final prompt.",
            PromptKind::Video => "You are an expert AI video generation prompt engineer.
Convert simple ideas into cinematic video prompts.
Include scene description, camera movement, lighting, motion, mood, and realism.
Do not explain anything. Output only the final prompt.",
            PromptKind::Text => "You are an expert writing prompt engineer.
Convert simple ideas into clear, detailed, professional writing prompts.
Improve clarity, depth, structure, and creativity.
Do not explain anything. Output only the final prompt.",
        }
    }
}

impl DetailLevel {
    fn hint(&self) -> &'static str {
        match self {
            DetailLevel::Short => "Keep the prompt concise but professional.",
            DetailLevel::Medium => "Provide a balanced level of detail and quality.",
            DetailLevel::Ultra => "Make the prompt extremely detailed, cinematic, and premium quality.",
        }
    }
}

/// System message for a kind/detail pair.
pub fn system_prompt(kind: PromptKind, detail: DetailLevel) -> String {
    format!("{}\n{}", kind.system_text(), detail.hint())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaPromptRequest {
    #[validate(length(min = 1, max = 1000))]
    pub user_prompt: String,
    #[serde(default)]
    pub prompt_type: PromptKind,
    #[serde(default)]
    pub quality: DetailLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaPromptResponse {
    pub input: String,
    #[serde(rename = "type")]
    pub kind: PromptKind,
    pub quality: DetailLevel,
    pub professional_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_joins_hint() {
        let sys = system_prompt(PromptKind::Video, DetailLevel::Ultra);
        assert!(sys.starts_with("You are an expert AI video generation prompt engineer."));
        assert!(sys.ends_with("premium quality."));
    }

    #[test]
    fn test_request_defaults() {
        let req: MediaPromptRequest = serde_json::from_str(r#"{"user_prompt":"a cat"}"#).unwrap();
        assert_eq!(req.prompt_type, PromptKind::Image);
        assert_eq!(req.quality, DetailLevel::Medium);
    }
}
