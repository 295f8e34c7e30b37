//! Compiled regular expressions for extraction and scoring.
//!
//! Built once via [`PatternSet::compile`] and handed to every component that
//! needs a pattern. The experience statements are kept in a slice so callers
//! evaluate them in priority order.

use regex::Regex;

const EMAIL: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
// Digits are ASCII `[0-9]`: `\d` in `regex` is Unicode-aware and would pick
// up Arabic-Indic and other digit glyphs left over from PDF extraction.
const PHONE: &str = r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";
const PHONE_SHAPE: &str = r"[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";

const EXPERIENCE_STATEMENTS: [&str; 3] = [
    r"(?i)([0-9]+)\s*years?\s*of\s*experience",
    r"(?i)([0-9]+)\+?\s*years?\s*experience",
    r"(?i)experience:\s*([0-9]+)\s*years?",
];

const YEAR_RANGE: &str = r"(?i)([0-9]{4})\s*[-–]\s*([0-9]{4}|present|current)";
const NUMBER_TOKEN: &str = r"[0-9]+[%$]?";
const METRIC: &str = r"[0-9]+[%$]";

#[derive(Debug, Clone)]
pub struct PatternSet {
    pub email: Regex,
    pub phone: Regex,
    /// Bare ten-digit phone shape used by the completeness sub-score.
    pub phone_shape: Regex,
    pub experience_statements: Vec<Regex>,
    pub year_range: Regex,
    /// A digit run optionally followed by `%` or `$`.
    pub number_token: Regex,
    /// A digit run that must be followed by `%` or `$`.
    pub metric: Regex,
}

impl PatternSet {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL)?,
            phone: Regex::new(PHONE)?,
            phone_shape: Regex::new(PHONE_SHAPE)?,
            experience_statements: EXPERIENCE_STATEMENTS
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<_, _>>()?,
            year_range: Regex::new(YEAR_RANGE)?,
            number_token: Regex::new(NUMBER_TOKEN)?,
            metric: Regex::new(METRIC)?,
        })
    }
}
