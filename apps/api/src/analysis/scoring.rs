//! Standalone scores reported next to `atsScore`.
//!
//! `keywordScore`, `formatScore`, `sectionScore` and `contentScore` are each
//! computed on their own. They are not inputs to `atsScore`, which has its own
//! weighted pipeline in [`crate::analysis::ats`].

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{count_present, Lexicon};
use crate::analysis::patterns::PatternSet;
use crate::analysis::sections::SectionMap;

pub const MAX_SCORE: u32 = 100;

/// Inclusive word-count window rewarded by `formatScore`.
pub const FORMAT_WORD_RANGE: (usize, usize) = (200, 800);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub ats_score: u32,
    pub keyword_score: u32,
    pub format_score: u32,
    pub section_score: u32,
    pub content_score: u32,
}

impl ScoreSet {
    pub fn all(&self) -> [u32; 5] {
        [
            self.ats_score,
            self.keyword_score,
            self.format_score,
            self.section_score,
            self.content_score,
        ]
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn non_blank_line_count(text: &str) -> usize {
    text.split('\n').filter(|l| !l.trim().is_empty()).count()
}

/// Share of the 14-term keyword list found in the text, as a percentage.
pub fn keyword_score(text: &str, lexicon: &Lexicon) -> u32 {
    let total = lexicon.score_keywords.len();
    if total == 0 {
        return 0;
    }
    let found = count_present(&text.to_lowercase(), lexicon.score_keywords);
    let score = (found as f64 / total as f64 * 100.0).round() as u32;
    score.min(MAX_SCORE)
}

/// 30 for ≥3 sections, 25 for bullets, 25 for >10 lines, 20 for length.
pub fn format_score(text: &str, sections: &SectionMap, lexicon: &Lexicon) -> u32 {
    let mut score = 0;
    if sections.len() >= 3 {
        score += 30;
    }
    if lexicon.has_bullet_marker(text) {
        score += 25;
    }
    if non_blank_line_count(text) > 10 {
        score += 25;
    }
    let words = word_count(text);
    if (FORMAT_WORD_RANGE.0..=FORMAT_WORD_RANGE.1).contains(&words) {
        score += 20;
    }
    score.min(MAX_SCORE)
}

/// 25 per required section present, 8 per optional section present.
pub fn section_score(sections: &SectionMap, lexicon: &Lexicon) -> u32 {
    let required = lexicon
        .required_sections
        .iter()
        .filter(|kind| sections.contains(**kind))
        .count() as u32;
    let optional = lexicon
        .optional_sections
        .iter()
        .filter(|kind| sections.contains(**kind))
        .count() as u32;
    (required * 25 + optional * 8).min(MAX_SCORE)
}

/// Action verbs (≤40) + number tokens (≤30) + tech terms (≤30).
pub fn content_score(text: &str, lexicon: &Lexicon, patterns: &PatternSet) -> u32 {
    let lower = text.to_lowercase();

    let verbs = count_present(&lower, lexicon.content_action_verbs) as u32;
    let numbers = patterns.number_token.find_iter(text).count() as u32;
    let tech = count_present(&lower, lexicon.tech_terms) as u32;

    let score = (verbs * 5).min(40) + (numbers * 3).min(30) + (tech * 3).min(30);
    score.min(MAX_SCORE)
}
