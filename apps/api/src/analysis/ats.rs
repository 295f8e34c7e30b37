//! Weighted ATS score.
//!
//! Four slices summed then rounded: keyword density (30), format (25),
//! content quality (25) and completeness (20). The format and content slices
//! here are deliberately separate from `format_score` / `content_score` in
//! [`crate::analysis::scoring`]; the two tracks are tuned independently.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{count_present, Lexicon};
use crate::analysis::patterns::PatternSet;
use crate::analysis::scoring::{word_count, MAX_SCORE};

/// Inclusive word-count window rewarded by the ATS format slice.
pub const ATS_WORD_RANGE: (usize, usize) = (200, 600);

const KEYWORD_WEIGHT: f64 = 30.0;
const FORMAT_CAP: f64 = 25.0;
const CONTENT_CAP: f64 = 25.0;
const COMPLETENESS_CAP: f64 = 20.0;

/// Unrounded slice values, kept for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub keywords: f64,
    pub format: f64,
    pub content: f64,
    pub completeness: f64,
}

impl AtsBreakdown {
    pub fn total(&self) -> u32 {
        let sum = self.keywords + self.format + self.content + self.completeness;
        sum.min(MAX_SCORE as f64).round().max(0.0) as u32
    }
}

pub fn ats_breakdown(text: &str, lexicon: &Lexicon, patterns: &PatternSet) -> AtsBreakdown {
    let lower = text.to_lowercase();
    AtsBreakdown {
        keywords: keyword_density(&lower, lexicon),
        format: ats_format(text, &lower, lexicon),
        content: ats_content_quality(text, &lower, lexicon, patterns),
        completeness: completeness(text, &lower, lexicon, patterns),
    }
}

pub fn ats_score(text: &str, lexicon: &Lexicon, patterns: &PatternSet) -> u32 {
    ats_breakdown(text, lexicon, patterns).total()
}

fn ratio(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    }
}

fn keyword_density(lower: &str, lexicon: &Lexicon) -> f64 {
    let found = count_present(lower, lexicon.ats_keywords);
    (ratio(found, lexicon.ats_keywords.len()) * KEYWORD_WEIGHT).min(KEYWORD_WEIGHT)
}

/// Bullets (8) + section-word coverage (up to 10) + length window (7).
fn ats_format(text: &str, lower: &str, lexicon: &Lexicon) -> f64 {
    let mut score = 0.0;
    if lexicon.has_bullet_marker(text) {
        score += 8.0;
    }
    let found = count_present(lower, lexicon.ats_section_words);
    score += ratio(found, lexicon.ats_section_words.len()) * 10.0;
    let words = word_count(text);
    if (ATS_WORD_RANGE.0..=ATS_WORD_RANGE.1).contains(&words) {
        score += 7.0;
    }
    f64::min(score, FORMAT_CAP)
}

/// Action-verb density (up to 15) + any number at all (10).
fn ats_content_quality(text: &str, lower: &str, lexicon: &Lexicon, patterns: &PatternSet) -> f64 {
    let found = count_present(lower, lexicon.ats_action_verbs);
    let mut score = (ratio(found, lexicon.ats_action_verbs.len()) * 15.0).min(15.0);
    if patterns.number_token.is_match(text) {
        score += 10.0;
    }
    f64::min(score, CONTENT_CAP)
}

/// 5 per section word present, 2.5 for an `@`, 2.5 for a phone-shaped number.
fn completeness(text: &str, lower: &str, lexicon: &Lexicon, patterns: &PatternSet) -> f64 {
    let mut score = 5.0 * count_present(lower, lexicon.ats_section_words) as f64;
    if text.contains('@') {
        score += 2.5;
    }
    if patterns.phone_shape.is_match(text) {
        score += 2.5;
    }
    f64::min(score, COMPLETENESS_CAP)
}
