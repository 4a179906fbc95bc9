// PromptForge Composer
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Builds the composite instruction string sent to the text model.
// Output is a pure function of its inputs.

use crate::engine::category::{title_case_tag, Category};
use crate::engine::request::{EnhancementRequest, TargetLength};
use crate::engine::templates::{template_for, GENERIC_TEMPLATE};

const PERSONA_PREAMBLE: &str = "You are an expert prompt engineer. Transform this basic user request into a professional, detailed AI prompt.";
const CLOSING_DIRECTIVE: &str = "Provide only the enhanced prompt, no additional commentary.";

/// Fields of a request that flow into the composite string.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub prompt: &'a str,
    pub tone: &'a str,
    pub include_examples: bool,
    pub target_length: TargetLength,
    pub custom_instructions: Option<&'a str>,
}

impl<'a> From<&'a EnhancementRequest> for Composition<'a> {
    fn from(req: &'a EnhancementRequest) -> Self {
        Self {
            prompt: &req.prompt,
            tone: &req.tone,
            include_examples: req.include_examples,
            target_length: req.target_length,
            custom_instructions: req.custom_instructions.as_deref(),
        }
    }
}

/// Compose the instruction string for a known category.
pub fn compose(category: Category, request: &EnhancementRequest) -> String {
    render(&category.label(), template_for(category), Composition::from(request))
}

/// Compose for a raw category tag. Unknown tags keep the same layout but use
/// the generic template.
pub fn compose_for_tag(tag: &str, composition: Composition<'_>) -> String {
    match Category::from_tag(tag) {
        Some(category) => render(&category.label(), template_for(category), composition),
        None => render(&title_case_tag(tag), GENERIC_TEMPLATE, composition),
    }
}

fn render(label: &str, template: &str, c: Composition<'_>) -> String {
    let mut out = String::with_capacity(template.len() + c.prompt.len() + 512);

    out.push_str(PERSONA_PREAMBLE);
    out.push_str("\n\n");
    out.push_str(&format!("USER'S BASIC REQUEST: \"{}\"\n\n", c.prompt));
    out.push_str(&format!("CATEGORY: {}\n", label));
    out.push_str(&format!("TONE: {}\n", c.tone));
    out.push_str(&format!(
        "INCLUDE EXAMPLES: {}\n",
        if c.include_examples { "Yes" } else { "No" }
    ));
    out.push_str(&format!("TARGET LENGTH: {}\n\n", c.target_length));
    out.push_str("ENHANCEMENT GUIDELINES:\n");
    out.push_str(template);
    out.push_str("\n\n");

    if let Some(extra) = c.custom_instructions.map(str::trim).filter(|s| !s.is_empty()) {
        out.push_str("ADDITIONAL INSTRUCTIONS:\n");
        out.push_str(extra);
        out.push_str("\n\n");
    }

    out.push_str(CLOSING_DIRECTIVE);
    out
}
