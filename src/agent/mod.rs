// PromptForge Agent Modules
// Copyright (c) 2026 Xing_The_Creator | PromptForge

pub mod enhancer;
pub mod gemini;
pub mod health;
pub mod openai;
pub mod provider;

pub use enhancer::PromptEnhancer;
pub use provider::{GenerationRequest, ProviderError, SharedGenerator, TextGenerator};
