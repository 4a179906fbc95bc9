// PromptForge Offline Fills
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Locally generated enhancement text for when no model answer is available,
// and the quick fill used by batch requests. Pure template fills only.

use crate::engine::category::Category;

/// Degraded replacement for a model answer.
pub fn fallback_enhancement(category: Category, prompt: &str) -> String {
    match category {
        Category::CreativeWriting => format!(
            "PROFESSIONAL WRITING PROMPT: {prompt}

GENRE: Specified based on prompt
TONE: Professional, engaging
LENGTH: 1000-2000 words

CHARACTERS:
- Protagonist with clear motivation
- Supporting characters with distinct personalities
- Antagonist with believable motivations

SETTING:
- Vivid, sensory-rich environment
- Appropriate time period
- Consistent world-building

PLOT STRUCTURE:
- Clear beginning, middle, and end
- Rising action and climax
- Satisfying resolution

REQUIREMENTS:
- Show, don't tell
- Use active voice
- Include dialogue
- Create emotional impact"
        ),
        Category::CodeGeneration => format!(
            "PROFESSIONAL CODING PROMPT: {prompt}

LANGUAGE: State the language and version
REQUIREMENTS:
- Clean, documented code
- Error handling
- Type annotations where the language supports them
- Unit tests

FUNCTIONALITY:
- Clear input/output specification
- Edge cases handled
- Performance considerations
- Security best practices

STRUCTURE:
- Modular design
- Appropriate separation of concerns
- Follows the language's style guide

DELIVERABLES:
- Working code
- Documentation
- Test cases
- Usage examples"
        ),
        Category::BusinessCommunication => format!(
            "PROFESSIONAL BUSINESS PROMPT: {prompt}

AUDIENCE: Professional stakeholders
TONE: Formal, clear, persuasive
FORMAT: Structured document/email

CONTENT:
- Clear objective statement
- Supporting arguments/data
- Call to action
- Professional closing

STRUCTURE:
- Introduction
- Body with key points
- Conclusion
- Next steps

REQUIREMENTS:
- Professional language
- Data-driven arguments
- Clear formatting
- Proofread for errors"
        ),
        Category::AcademicResearch | Category::DataAnalysis | Category::General => format!(
            "PROFESSIONAL PROMPT: {prompt}

OBJECTIVES:
- Clear, specific goals
- Measurable outcomes
- Realistic constraints

REQUIREMENTS:
- Detailed specifications
- Quality standards
- Delivery timeline

FORMAT:
- Structured response
- Appropriate length
- Professional tone

EVALUATION:
- Success criteria
- Quality metrics
- Review process"
        ),
    }
}

/// Quick fill used by the batch endpoint, which never calls a model.
pub fn batch_enhancement(category: Category, prompt: &str) -> String {
    let label = category.label();
    let plain = label.to_lowercase();

    format!(
        "Professional Prompt for: \"{prompt}\"

Category: {label}

Detailed Requirements:
1. Provide specific, actionable instructions
2. Include clear success criteria
3. Specify format and structure requirements
4. Add relevant constraints and limitations
5. Define the target audience or context

Expected Output:
- Comprehensive response addressing all specified requirements
- Professional tone appropriate for {plain}
- Well-structured format with clear sections

Constraints:
- Must be original and creative
- Should follow best practices for {plain} prompts
- Avoid vague language; be specific and detailed"
    )
}
