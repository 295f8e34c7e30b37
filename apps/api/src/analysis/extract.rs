//! Entity Extractor: contact details, skills, education and years of
//! experience pulled straight from the raw text. Each extraction degrades to
//! an empty/zero default instead of failing.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::Lexicon;
use crate::analysis::patterns::PatternSet;

pub const MAX_SKILLS: usize = 15;
pub const MAX_EXPERIENCE_YEARS: u32 = 20;
pub const EDUCATION_NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.phone.is_empty()
    }
}

pub fn extract_contact(text: &str, patterns: &PatternSet) -> ContactInfo {
    let first = |re: &regex::Regex| {
        re.find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };
    ContactInfo {
        email: first(&patterns.email),
        phone: first(&patterns.phone),
    }
}

/// Matches dictionary skills by case-insensitive substring containment.
///
/// A hit lying entirely inside a hit of a longer dictionary term is credited
/// to the longer term only, so "javascript" does not also report "java".
/// Result is in dictionary scan order, deduplicated, at most [`MAX_SKILLS`].
pub fn extract_skills(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let lower = text.to_lowercase();

    let hits: Vec<(&str, Vec<(usize, usize)>)> = lexicon
        .skill_terms()
        .map(|term| {
            let spans = lower
                .match_indices(term)
                .map(|(start, m)| (start, start + m.len()))
                .collect::<Vec<_>>();
            (term, spans)
        })
        .filter(|(_, spans)| !spans.is_empty())
        .collect();

    let index = HitIndex::new(hits.iter().flat_map(|(_, spans)| spans.iter().copied()));

    let mut skills: Vec<String> = Vec::new();
    for (term, spans) in &hits {
        let standalone = spans
            .iter()
            .any(|&(start, end)| !index.is_covered(start, end));
        if standalone && !skills.iter().any(|s| s == term) {
            skills.push(term.to_string());
        }
        if skills.len() == MAX_SKILLS {
            break;
        }
    }
    skills
}

/// Every dictionary hit sorted by start (longest first on ties), with a
/// running maximum of end offsets so containment is one binary search.
struct HitIndex {
    spans: Vec<(usize, usize)>,
    max_end: Vec<usize>,
}

impl HitIndex {
    fn new(spans: impl Iterator<Item = (usize, usize)>) -> Self {
        let mut spans: Vec<(usize, usize)> = spans.collect();
        spans.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        spans.dedup();
        let max_end = spans
            .iter()
            .scan(0, |max, &(_, end)| {
                *max = usize::max(*max, end);
                Some(*max)
            })
            .collect();
        Self { spans, max_end }
    }

    /// True when another hit spans strictly more than `start..end` around it.
    /// Equal spans are the same text, hence the same term, so any covering
    /// hit belongs to a longer term.
    fn is_covered(&self, start: usize, end: usize) -> bool {
        let idx = self.spans.partition_point(|&(s, _)| s < start);
        if idx > 0 && self.max_end[idx - 1] >= end {
            return true;
        }
        matches!(self.spans.get(idx), Some(&(s, e)) if s == start && e > end)
    }
}

/// Returns the first line mentioning a degree or institution keyword, in its
/// original case, or `"Not specified"`.
pub fn extract_education(text: &str, lexicon: &Lexicon) -> String {
    text.split('\n')
        .find(|line| {
            let lower = line.to_lowercase();
            lexicon
                .education_keywords
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| EDUCATION_NOT_SPECIFIED.to_string())
}

/// Estimates years of experience.
///
/// An explicit statement ("5 years of experience") wins outright; otherwise
/// all year ranges are summed (open ranges end at `current_year`) and capped
/// at [`MAX_EXPERIENCE_YEARS`].
pub fn estimate_experience_years(text: &str, patterns: &PatternSet, current_year: i32) -> u32 {
    for statement in &patterns.experience_statements {
        if let Some(years) = statement
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            return years;
        }
    }

    let total: i64 = patterns
        .year_range
        .captures_iter(text)
        .filter_map(|caps| {
            let start: i64 = caps.get(1)?.as_str().parse().ok()?;
            let end_raw = caps.get(2)?.as_str().to_lowercase();
            let end: i64 = if end_raw.contains("present") || end_raw.contains("current") {
                i64::from(current_year)
            } else {
                end_raw.parse().ok()?
            };
            Some((end - start).max(0))
        })
        .sum();

    total.min(i64::from(MAX_EXPERIENCE_YEARS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::compile().unwrap()
    }

    #[test]
    fn test_contact_email_and_phone() {
        let contact = extract_contact(
            "Jane Doe | jane.doe@mail.example.org | (555) 123-4567",
            &patterns(),
        );
        assert_eq!(contact.email, "jane.doe@mail.example.org");
        assert_eq!(contact.phone, "(555) 123-4567");
        assert!(contact.is_complete());
    }

    #[test]
    fn test_contact_fields_are_independent() {
        let contact = extract_contact("reach me at dev@site.io", &patterns());
        assert_eq!(contact.email, "dev@site.io");
        assert!(contact.phone.is_empty());
        assert!(!contact.is_complete());

        let contact = extract_contact("Phone: 555.987.6543", &patterns());
        assert!(contact.email.is_empty());
        assert_eq!(contact.phone, "555.987.6543");
    }

    #[test]
    fn test_skills_follow_dictionary_order() {
        let skills = extract_skills("Skills: JavaScript, Python, React", &Lexicon::default());
        assert_eq!(skills, vec!["javascript", "python", "react"]);
    }

    #[test]
    fn test_standalone_short_term_is_still_found() {
        let skills = extract_skills("JavaScript and Java, PostgreSQL", &Lexicon::default());
        assert!(skills.contains(&"java".to_string()));
        assert!(skills.contains(&"postgresql".to_string()));
        assert!(!skills.contains(&"sql".to_string()));
    }

    #[test]
    fn test_substring_inside_ordinary_word_counts() {
        // no word boundaries: "go" sits inside "algorithms"
        let skills = extract_skills("algorithms", &Lexicon::default());
        assert!(skills.contains(&"go".to_string()));
    }

    #[test]
    fn test_skills_capped_and_unique() {
        let text = "python python ruby php swift kotlin scala matlab html css angular vue \
                    django flask spring docker kubernetes terraform ansible";
        let skills = extract_skills(text, &Lexicon::default());
        assert_eq!(skills.len(), MAX_SKILLS);
        let mut deduped = skills.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), skills.len());
    }

    #[test]
    fn test_shadowing_scales_linearly_with_repetition() {
        let text = "javascript ".repeat(200_000);
        let started = std::time::Instant::now();
        let skills = extract_skills(&text, &Lexicon::default());
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
        assert!(!skills.contains(&"r".to_string()));
    }

    #[test]
    fn test_hit_covered_by_shared_start_or_overlap() {
        let index = HitIndex::new([(0, 10), (0, 4), (12, 14), (11, 20)].into_iter());
        assert!(index.is_covered(0, 4));
        assert!(!index.is_covered(0, 10));
        assert!(index.is_covered(12, 14));
        assert!(!index.is_covered(11, 20));
        assert!(!index.is_covered(9, 12));
    }

    #[test]
    fn test_no_skills_is_empty() {
        assert!(extract_skills("", &Lexicon::default()).is_empty());
    }

    #[test]
    fn test_education_returns_original_case_line() {
        let text = "Jane\n  Bachelor of Science, State University  \nSkills";
        assert_eq!(
            extract_education(text, &Lexicon::default()),
            "Bachelor of Science, State University"
        );
    }

    #[test]
    fn test_education_defaults_when_absent() {
        assert_eq!(extract_education("Rust\nGo", &Lexicon::default()), "Not specified");
    }

    #[test]
    fn test_explicit_experience_statement() {
        let years = estimate_experience_years("5 years of experience", &patterns(), 2024);
        assert_eq!(years, 5);
        assert_eq!(estimate_experience_years("8+ years experience in Rust", &patterns(), 2024), 8);
        assert_eq!(estimate_experience_years("Experience: 3 years", &patterns(), 2024), 3);
    }

    #[test]
    fn test_statement_wins_over_date_ranges() {
        let text = "2 years of experience\nAcme 2000-2015";
        assert_eq!(estimate_experience_years(text, &patterns(), 2024), 2);
    }

    #[test]
    fn test_date_ranges_summed_with_present() {
        let text = "Acme 2018-2020\nGlobex 2021-present";
        assert_eq!(estimate_experience_years(text, &patterns(), 2024), 5);
    }

    #[test]
    fn test_current_closes_open_range() {
        let text = "Initech 2016-2019\nHooli 2020 – Current";
        assert_eq!(estimate_experience_years(text, &patterns(), 2024), 7);
    }

    #[test]
    fn test_date_ranges_capped_at_twenty() {
        let text = "1990-2005\n2005-2020";
        assert_eq!(estimate_experience_years(text, &patterns(), 2024), 20);
    }

    #[test]
    fn test_inverted_range_contributes_zero() {
        assert_eq!(estimate_experience_years("2020-2018", &patterns(), 2024), 0);
    }

    #[test]
    fn test_no_experience_signal_is_zero() {
        assert_eq!(estimate_experience_years("hello", &patterns(), 2024), 0);
    }
}
