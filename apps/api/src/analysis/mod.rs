// Résumé Analysis & Scoring Engine
// Pure and synchronous: raw text in, one immutable AnalysisResult out.
// No I/O, no shared mutable state; safe to call from any number of handlers.

pub mod ats;
pub mod extract;
pub mod feedback;
pub mod handlers;
pub mod lexicon;
pub mod patterns;
pub mod scoring;
pub mod sections;
pub mod suggestions;

use chrono::{Datelike, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::analysis::extract::{ContactInfo, EDUCATION_NOT_SPECIFIED};
use crate::analysis::lexicon::Lexicon;
use crate::analysis::patterns::PatternSet;
use crate::analysis::scoring::ScoreSet;
use crate::analysis::sections::SectionMap;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

/// Everything the engine knows about one résumé. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: ScoreSet,
    pub skills: Vec<String>,
    pub contact: ContactInfo,
    pub education_line: String,
    pub experience_years: u32,
    pub sections: SectionMap,
    pub suggestions: Vec<String>,
    pub word_count: usize,
}

/// Quick yes/no view of an `AnalysisResult` for report headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisHighlights {
    pub has_contact_info: bool,
    pub has_skills: bool,
    pub has_experience: bool,
    pub has_education: bool,
}

impl AnalysisResult {
    pub fn highlights(&self) -> AnalysisHighlights {
        AnalysisHighlights {
            has_contact_info: self.contact.is_complete(),
            has_skills: !self.skills.is_empty(),
            has_experience: self.experience_years > 0,
            has_education: self.education_line != EDUCATION_NOT_SPECIFIED,
        }
    }
}

/// The Analysis Assembler. Holds the dictionaries and compiled patterns;
/// build once at startup and share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    lexicon: Lexicon,
    patterns: PatternSet,
}

impl ResumeAnalyzer {
    pub fn new(lexicon: Lexicon) -> Result<Self, AnalysisError> {
        Ok(Self {
            lexicon,
            patterns: PatternSet::compile()?,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyses `text`, resolving open-ended date ranges against this year.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_at(text, Utc::now().year())
    }

    /// Same as [`analyze`](Self::analyze) with an explicit "present" year.
    pub fn analyze_at(
        &self,
        text: &str,
        current_year: i32,
    ) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "resume text is empty".to_string(),
            ));
        }

        let lexicon = &self.lexicon;
        let patterns = &self.patterns;

        let sections = sections::segment(text);

        let skills = extract::extract_skills(text, lexicon);
        let contact = extract::extract_contact(text, patterns);
        let education_line = extract::extract_education(text, lexicon);
        let experience_years = extract::estimate_experience_years(text, patterns, current_year);

        let scores = ScoreSet {
            ats_score: ats::ats_score(text, lexicon, patterns),
            keyword_score: scoring::keyword_score(text, lexicon),
            format_score: scoring::format_score(text, &sections, lexicon),
            section_score: scoring::section_score(&sections, lexicon),
            content_score: scoring::content_score(text, lexicon, patterns),
        };

        let suggestions =
            suggestions::generate_suggestions(text, &sections, scores.ats_score, patterns);
        let word_count = scoring::word_count(text);

        debug!(
            ats_score = scores.ats_score,
            sections = sections.len(),
            skills = skills.len(),
            word_count,
            "Resume analysed"
        );

        Ok(AnalysisResult {
            scores,
            skills,
            contact,
            education_line,
            experience_years,
            sections,
            suggestions,
            word_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::SectionKind;

    const SAMPLE_RESUME: &str = r#"
        Jane Doe
        jane.doe@example.com | (555) 123-4567

        Education
        Bachelor of Science in Computer Science, State University

        Summary
        Backend engineer focused on reliable APIs and cloud architecture.

        Experience
        Senior Engineer, Acme Corp 2019-present
        • Led migration to microservices, reduced latency by 40%
        • Improved deployment frequency 3x using Docker and CI/CD
        Engineer, Globex 2015-2019
        • Developed Python services handling $2M in transactions

        Skills
        Python, Rust, PostgreSQL, AWS, Kubernetes, Leadership
    "#;

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::new(Lexicon::default()).unwrap()
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let err = analyzer().analyze("").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        let err = analyzer().analyze("   \n\t ").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_full_resume_analysis() {
        let result = analyzer().analyze_at(SAMPLE_RESUME, 2024).unwrap();

        assert_eq!(result.contact.email, "jane.doe@example.com");
        assert_eq!(result.contact.phone, "(555) 123-4567");
        assert_eq!(
            result.education_line,
            "Bachelor of Science in Computer Science, State University"
        );
        // (2024 - 2019) + (2019 - 2015)
        assert_eq!(result.experience_years, 9);
        assert!(result.skills.contains(&"python".to_string()));
        assert!(result.skills.contains(&"postgresql".to_string()));
        assert!(result.sections.contains(SectionKind::Experience));
        assert!(result.sections.contains(SectionKind::Education));
        assert!(result.sections.contains(SectionKind::Skills));
        assert_eq!(result.scores.section_score, 83);
        assert!(!result.suggestions.is_empty());

        let highlights = result.highlights();
        assert!(highlights.has_contact_info);
        assert!(highlights.has_skills);
        assert!(highlights.has_experience);
        assert!(highlights.has_education);
    }

    #[test]
    fn test_scores_always_in_range() {
        let analyzer = analyzer();
        let noisy = "•".repeat(5000);
        let inputs = [
            "x",
            SAMPLE_RESUME,
            noisy.as_str(),
            "99999999999999999999999 years of experience",
        ];
        for text in inputs {
            let result = analyzer.analyze_at(text, 2024).unwrap();
            for score in result.scores.all() {
                assert!(score <= 100, "score {score} out of range for {text:?}");
            }
            assert!(result.skills.len() <= 15);
            assert!(!result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = analyzer();
        let a = analyzer.analyze_at(SAMPLE_RESUME, 2024).unwrap();
        let b = analyzer.analyze_at(SAMPLE_RESUME, 2024).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn test_result_uses_camel_case_field_names() {
        let result = analyzer().analyze_at(SAMPLE_RESUME, 2024).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["scores"]["atsScore"].is_u64());
        assert!(json["scores"]["contentScore"].is_u64());
        assert!(json["educationLine"].is_string());
        assert!(json["experienceYears"].is_u64());
        assert!(json["wordCount"].is_u64());
        assert!(json["sections"]["experience"].is_string());
    }

    #[test]
    fn test_minimal_text_degrades_gracefully() {
        let result = analyzer().analyze_at("hello", 2024).unwrap();
        assert!(result.skills.is_empty());
        assert_eq!(result.experience_years, 0);
        assert_eq!(result.education_line, "Not specified");
        assert_eq!(result.word_count, 1);
        assert!(!result.highlights().has_education);
    }
}
