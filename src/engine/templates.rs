// PromptForge Instruction Templates
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Static guideline blocks handed to the text model, one per category.

use crate::engine::category::Category;

pub const CREATIVE_WRITING_TEMPLATE: &str = "\
Transform this into a professional creative writing prompt with:
1. SPECIFIC GENRE & STYLE: Specify exact genre (fantasy, sci-fi, romance, mystery, etc.), tone (dark, humorous, melancholic, uplifting), and writing style
2. CHARACTER DEVELOPMENT: Define main characters with specific traits, motivations, flaws, and arcs
3. SETTING DETAILS: Provide vivid location, time period, atmosphere, and sensory details
4. PLOT STRUCTURE: Outline beginning, conflict, climax, and resolution with specific plot points
5. THEMES & SYMBOLISM: Specify underlying themes and symbolic elements
6. TECHNICAL REQUIREMENTS: Word count, POV (first/third person), tense, dialogue ratio
7. CREATIVE CONSTRAINTS: Specific challenges or unique requirements

Return in this structure:
TITLE: [Creative Title]
GENRE: [Specific Genre]
TONE: [Exact Tone]
CHARACTERS: [Detailed Character Descriptions]
SETTING: [Vivid Setting Details]
PLOT: [Structured Plot Outline]
THEMES: [Key Themes]
TECHNICAL SPECS: [Word Count, POV, Tense, etc.]
CONSTRAINTS: [Creative Limitations]";

pub const CODE_GENERATION_TEMPLATE: &str = "\
Transform this into a professional coding prompt with:
1. LANGUAGE & VERSION: Specify exact programming language and version
2. FUNCTION SPECIFICATION: Clear input parameters, return types, and function signature
3. EDGE CASES: Specific edge cases and error conditions to handle
4. PERFORMANCE: Time/space complexity requirements and optimization constraints
5. STYLE GUIDE: Code formatting rules, naming conventions, documentation requirements
6. TEST CASES: Specific input/output examples including edge cases
7. DEPENDENCIES: Required libraries, packages, or external APIs
8. ERROR HANDLING: How to handle exceptions and invalid inputs

Return in this structure:
PROBLEM STATEMENT: [Clear Description]
FUNCTION SIGNATURE: [Exact Function Definition]
INPUT FORMAT: [Input Specifications]
OUTPUT FORMAT: [Output Specifications]
CONSTRAINTS: [Technical Limitations]
EXAMPLES: [Test Cases with Input/Output]
NOTES: [Additional Requirements]";

pub const BUSINESS_COMMUNICATION_TEMPLATE: &str = "\
Transform this into a professional business communication prompt with:
1. AUDIENCE: Specific target audience with their knowledge level and concerns
2. PURPOSE: Clear objective and desired outcome
3. TONE & STYLE: Formal, persuasive, informative, or motivational tone
4. STRUCTURE: Specific sections to include (executive summary, introduction, body, conclusion, call-to-action)
5. KEY POINTS: Mandatory points to cover with supporting data
6. FORMAT: Email, report, proposal, presentation, or memo format
7. LENGTH: Specific word count or time duration
8. SUCCESS METRICS: How effectiveness will be measured

Return in this structure:
DOCUMENT TYPE: [Email/Report/Proposal/etc.]
AUDIENCE: [Target Readers]
OBJECTIVE: [Clear Purpose]
KEY MESSAGES: [Main Points]
STRUCTURE: [Document Outline]
TONE: [Communication Style]
LENGTH: [Word/Page Count]
SUCCESS CRITERIA: [Effectiveness Metrics]";

pub const ACADEMIC_RESEARCH_TEMPLATE: &str = "\
Transform this into a professional academic research prompt with:
1. RESEARCH QUESTION: A precise, answerable question or hypothesis
2. FIELD & SCOPE: Discipline, sub-field, and the boundaries of the inquiry
3. METHODOLOGY: Qualitative, quantitative, or mixed methods with justification
4. SOURCES: Types of literature, datasets, or primary sources to consult
5. CITATION STYLE: Required referencing format (APA, MLA, Chicago, IEEE)
6. STRUCTURE: Abstract, introduction, literature review, methods, results, discussion
7. ACADEMIC STANDARDS: Objectivity, rigor, and ethical considerations

Return in this structure:
TITLE: [Working Title]
RESEARCH QUESTION: [Question or Hypothesis]
SCOPE: [Boundaries and Focus]
METHODOLOGY: [Research Approach]
SOURCES: [Expected References]
OUTLINE: [Section Structure]
CITATION STYLE: [Format]
DELIVERABLE: [Length and Format]";

pub const DATA_ANALYSIS_TEMPLATE: &str = "\
Transform this into a professional data analysis prompt with:
1. DATASET: Describe the data source, size, fields, and known quality issues
2. OBJECTIVE: The business or research question the analysis must answer
3. METHODS: Statistical techniques, models, or aggregations to apply
4. TOOLS: Required language, libraries, or platforms
5. VISUALIZATION: Chart types and what each should communicate
6. ASSUMPTIONS: Data assumptions and how to validate them
7. OUTPUT: Format of findings, tables, and summary statistics

Return in this structure:
OBJECTIVE: [Analysis Goal]
DATA DESCRIPTION: [Dataset Details]
PREPARATION: [Cleaning and Transformation Steps]
ANALYSIS PLAN: [Methods and Metrics]
VISUALIZATIONS: [Charts and Purpose]
DELIVERABLES: [Report, Dashboard, or Notebook]
VALIDATION: [How Results Are Checked]";

/// Used for `General` and for any tag that is not a known category.
pub const GENERIC_TEMPLATE: &str = "\
Transform this basic prompt into a detailed, professional prompt with:
1. Clear objectives and deliverables
2. Specific requirements and constraints
3. Format and structure guidelines
4. Success criteria and evaluation metrics
5. Appropriate tone and style for the context

Make it comprehensive, actionable, and ready for professional use.";

/// Template body for a category. Adding a variant to `Category` breaks this
/// match until a template is chosen for it.
pub fn template_for(category: Category) -> &'static str {
    match category {
        Category::CreativeWriting => CREATIVE_WRITING_TEMPLATE,
        Category::CodeGeneration => CODE_GENERATION_TEMPLATE,
        Category::BusinessCommunication => BUSINESS_COMMUNICATION_TEMPLATE,
        Category::AcademicResearch => ACADEMIC_RESEARCH_TEMPLATE,
        Category::DataAnalysis => DATA_ANALYSIS_TEMPLATE,
        Category::General => GENERIC_TEMPLATE,
    }
}

/// Template lookup by wire tag; unknown tags get the generic template.
pub fn template_for_tag(tag: &str) -> &'static str {
    Category::from_tag(tag)
        .map(template_for)
        .unwrap_or(GENERIC_TEMPLATE)
}
