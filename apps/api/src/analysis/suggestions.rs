//! Suggestion Generator: fixed, ordered rules over the raw text, the
//! segmented sections and the ATS score. Never returns an empty list.

use crate::analysis::patterns::PatternSet;
use crate::analysis::scoring::word_count;
use crate::analysis::sections::{SectionKind, SectionMap};

pub const ATS_SCORE_THRESHOLD: u32 = 70;
pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 800;

pub const ADD_KEYWORDS: &str = "Add more relevant keywords from the job description";
pub const ADD_SUMMARY: &str = "Add a professional summary or objective section";
pub const ADD_SKILLS: &str = "Include a dedicated skills section";
pub const ADD_ACHIEVEMENTS: &str = "Include quantifiable achievements and results";
pub const EXPAND_CONTENT: &str = "Expand your resume content - it appears too brief";
pub const CONDENSE_CONTENT: &str = "Consider condensing your resume - it may be too lengthy";
pub const ADD_METRICS: &str = "Add specific numbers and percentages to showcase impact";
pub const LOOKS_GOOD: &str =
    "Your resume looks good! Consider tailoring it for specific job applications";

pub fn generate_suggestions(
    text: &str,
    sections: &SectionMap,
    ats_score: u32,
    patterns: &PatternSet,
) -> Vec<String> {
    let lower = text.to_lowercase();
    let words = word_count(text);

    // "objective" headers are filed under summary by the segmenter
    let rules: [(bool, &str); 7] = [
        (ats_score < ATS_SCORE_THRESHOLD, ADD_KEYWORDS),
        (!sections.contains(SectionKind::Summary), ADD_SUMMARY),
        (!sections.contains(SectionKind::Skills), ADD_SKILLS),
        (
            !lower.contains("achieved") && !lower.contains("improved"),
            ADD_ACHIEVEMENTS,
        ),
        (words < MIN_WORDS, EXPAND_CONTENT),
        (words > MAX_WORDS, CONDENSE_CONTENT),
        (!patterns.metric.is_match(text), ADD_METRICS),
    ];

    let mut suggestions: Vec<String> = Vec::new();
    for (fired, message) in rules {
        if fired && !suggestions.iter().any(|s| s == message) {
            suggestions.push(message.to_string());
        }
    }

    if suggestions.is_empty() {
        suggestions.push(LOOKS_GOOD.to_string());
    }
    suggestions
}
