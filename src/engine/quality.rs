// PromptForge Quality Heuristic
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Additive checklist score over generated text, clamped to [0, 100].

use serde::Serialize;

pub const MAX_SCORE: f64 = 100.0;

const IDEAL_BAND: (usize, usize) = (100, 500);
const IDEAL_BONUS: f64 = 25.0;
const NEAR_BONUS: f64 = 15.0;
const OUTSIDE_BONUS: f64 = 5.0;

const SPECIFICITY_TERMS: &[&str] = &["specific", "detailed", "exact", "precise", "concrete"];
const STRUCTURE_TERMS: &[&str] = &["format", "structure", "outline", "section", "include"];
const CONSTRAINT_TERMS: &[&str] = &["must", "should", "require", "constraint", "limit"];
const EXAMPLE_TERMS: &[&str] = &["example", "for instance"];
const TONE_TERMS: &[&str] = &["professional", "formal", "academic", "technical"];

/// (terms, points). Each entry is checked once and contributes independently.
const BONUSES: &[(&[&str], f64)] = &[
    (SPECIFICITY_TERMS, 20.0),
    (STRUCTURE_TERMS, 20.0),
    (CONSTRAINT_TERMS, 15.0),
    (EXAMPLE_TERMS, 10.0),
    (TONE_TERMS, 10.0),
];

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rough token estimate: one token per four characters.
pub fn token_estimate(text: &str) -> usize {
    text.chars().count() / 4
}

fn length_bonus(words: usize) -> f64 {
    let (lo, hi) = IDEAL_BAND;
    if (lo..=hi).contains(&words) {
        IDEAL_BONUS
    } else if (50..lo).contains(&words) || (hi + 1..=800).contains(&words) {
        NEAR_BONUS
    } else {
        OUTSIDE_BONUS
    }
}

/// Heuristic quality score. Total over all input, including "".
pub fn score(text: &str) -> f64 {
    let lower = text.to_lowercase();

    let bonus: f64 = BONUSES
        .iter()
        .filter(|(terms, _)| terms.iter().any(|t| lower.contains(t)))
        .map(|(_, points)| points)
        .sum();

    (length_bonus(word_count(text)) + bonus).min(MAX_SCORE)
}

/// Statistics attached to every enhanced result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub token_estimate: usize,
    pub quality_score: f64,
}

impl TextMetrics {
    pub fn measure(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            token_estimate: token_estimate(text),
            quality_score: score(text),
        }
    }
}
