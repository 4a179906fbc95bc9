// PromptForge Request Types
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::engine::category::Category;

pub const MAX_PROMPT_CHARS: u64 = 1000;
pub const MAX_BATCH_PROMPTS: u64 = 50;

/// How long the enhanced prompt should ask the model to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLength {
    Brief,
    #[default]
    Detailed,
    Comprehensive,
}

impl TargetLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLength::Brief => "brief",
            TargetLength::Detailed => "detailed",
            TargetLength::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for TargetLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" => Ok(TargetLength::Brief),
            "detailed" => Ok(TargetLength::Detailed),
            "comprehensive" => Ok(TargetLength::Comprehensive),
            other => Err(format!("unknown target length '{}'", other)),
        }
    }
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_true() -> bool {
    true
}

/// One enhancement call as received from a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnhancementRequest {
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_true")]
    pub include_examples: bool,
    #[serde(default)]
    pub target_length: TargetLength,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl EnhancementRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            category: None,
            tone: default_tone(),
            include_examples: true,
            target_length: TargetLength::default(),
            custom_instructions: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchEnhancementRequest {
    #[validate(length(min = 1, max = 50))]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
}
