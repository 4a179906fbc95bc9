// PromptForge Category Classifier
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Keyword heuristics that route a raw prompt to one instruction template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of prompt categories. Every category owns exactly one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CreativeWriting,
    CodeGeneration,
    BusinessCommunication,
    AcademicResearch,
    DataAnalysis,
    General,
}

/// Detection order. The first entry with a matching keyword wins, so
/// "write a python function" lands in creative writing.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::CreativeWriting,
        &["write", "story", "poem", "character", "fiction", "narrative"],
    ),
    (
        Category::CodeGeneration,
        &["code", "function", "program", "algorithm", "python", "javascript"],
    ),
    (
        Category::BusinessCommunication,
        &["business", "email", "proposal", "report", "presentation", "marketing"],
    ),
    (
        Category::AcademicResearch,
        &["research", "paper", "thesis", "study", "academic", "analysis"],
    ),
    (
        Category::DataAnalysis,
        &["data", "analyze", "statistics", "chart", "graph", "visualization"],
    ),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CreativeWriting,
        Category::CodeGeneration,
        Category::BusinessCommunication,
        Category::AcademicResearch,
        Category::DataAnalysis,
        Category::General,
    ];

    /// Wire tag, e.g. `creative_writing`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CreativeWriting => "creative_writing",
            Category::CodeGeneration => "code_generation",
            Category::BusinessCommunication => "business_communication",
            Category::AcademicResearch => "academic_research",
            Category::DataAnalysis => "data_analysis",
            Category::General => "general",
        }
    }

    /// Parse a wire tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == tag.trim().to_lowercase())
    }

    /// Human readable label, e.g. `Creative Writing`.
    pub fn label(&self) -> String {
        title_case_tag(self.as_str())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::CreativeWriting => "Stories, poems, narratives",
            Category::CodeGeneration => "Programming, algorithms, functions",
            Category::BusinessCommunication => "Emails, reports, proposals",
            Category::AcademicResearch => "Papers, studies, analysis",
            Category::DataAnalysis => "Data processing, visualization",
            Category::General => "All other prompts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify free text into a category. Total: falls back to `General`.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();

    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// `data_analysis` -> `Data Analysis`. Works for tags outside the enum too.
pub fn title_case_tag(tag: &str) -> String {
    tag.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
