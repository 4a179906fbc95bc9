use promptforge::engine::composer::Composition;
use promptforge::engine::quality::MAX_SCORE;
use promptforge::engine::{classify, compose, compose_for_tag, score, Category, EnhancementRequest, TargetLength};

fn composition(prompt: &str) -> Composition<'_> {
    Composition {
        prompt,
        tone: "professional",
        include_examples: true,
        target_length: TargetLength::Detailed,
        custom_instructions: None,
    }
}

#[test]
fn test_classify_first_match_wins() {
    assert_eq!(classify("write a python function"), Category::CreativeWriting);
    assert_eq!(classify("Implement a sorting ALGORITHM"), Category::CodeGeneration);
    assert_eq!(classify("quarterly report for the board"), Category::BusinessCommunication);
    assert_eq!(classify("literature review for my thesis"), Category::AcademicResearch);
    assert_eq!(classify("plot a chart of revenue"), Category::DataAnalysis);
    assert_eq!(classify("hello there"), Category::General);
    assert_eq!(classify(""), Category::General);
}

#[test]
fn test_dragon_story_end_to_end() {
    let request = EnhancementRequest::new("Write a story about a dragon");
    let category = classify(&request.prompt);
    assert_eq!(category, Category::CreativeWriting);

    let composite = compose(category, &request);
    assert!(composite.contains("Creative Writing"));
    assert!(composite.contains("\"Write a story about a dragon\""));
    assert!(composite.ends_with("Provide only the enhanced prompt, no additional commentary."));
}

#[test]
fn test_compose_is_deterministic() {
    let request = EnhancementRequest::new("Summarize this dataset");
    assert_eq!(
        compose(Category::DataAnalysis, &request),
        compose(Category::DataAnalysis, &request)
    );
}

#[test]
fn test_unknown_tag_uses_generic_guidelines() {
    let general = compose_for_tag("general", composition("x"));
    let unknown = compose_for_tag("nonexistent_tag", composition("x"));

    let guidelines = |s: &str| s.split("ENHANCEMENT GUIDELINES:").nth(1).map(str::to_string);
    assert_eq!(guidelines(&general), guidelines(&unknown));
    assert!(unknown.contains("CATEGORY: Nonexistent Tag"));
}

#[test]
fn test_custom_instructions_block() {
    let mut request = EnhancementRequest::new("Write a poem");
    request.custom_instructions = Some("Rhyme every line".into());
    let composite = compose(Category::CreativeWriting, &request);

    let extra = composite.find("ADDITIONAL INSTRUCTIONS:").unwrap();
    let closing = composite.find("Provide only the enhanced prompt").unwrap();
    assert!(extra < closing);
    assert!(composite.contains("Rhyme every line"));
}

#[test]
fn test_score_never_exceeds_max() {
    let everything = "specific detailed format structure must should example for instance \
                      professional formal technical "
        .repeat(20);
    assert_eq!(score(&everything), MAX_SCORE);

    let long = "word ".repeat(5000);
    for text in ["", "a", "example", long.as_str()] {
        let s = score(text);
        assert!((0.0..=MAX_SCORE).contains(&s), "score {} out of range", s);
    }
}

#[test]
fn test_score_is_idempotent() {
    let everything = "specific detailed format structure must should example for instance \
                      professional formal technical "
        .repeat(20);
    let five_hundred = "word ".repeat(500);
    for text in ["", everything.as_str(), five_hundred.as_str(), "Write a formal report"] {
        assert_eq!(score(text), score(text));
    }
}
