// PromptForge Engine Module
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// The pure core: classification, template composition and scoring.
// Nothing in here performs I/O or holds state.

pub mod category;
pub mod composer;
pub mod fallback;
pub mod media;
pub mod quality;
pub mod request;
pub mod templates;

pub use category::{classify, Category};
pub use composer::{compose, compose_for_tag, Composition};
pub use quality::{score, TextMetrics};
pub use request::{EnhancementRequest, TargetLength};
