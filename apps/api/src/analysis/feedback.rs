use serde::{Deserialize, Serialize};

use crate::analysis::sections::{SectionKind, SectionMap};

/// Serialized as the bare variant name (`"Excellent"`, `"Good"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeedbackLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FeedbackLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => FeedbackLevel::Excellent,
            s if s >= 60 => FeedbackLevel::Good,
            s if s >= 40 => FeedbackLevel::Fair,
            _ => FeedbackLevel::Poor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtsFeedback {
    pub score: u32,
    pub level: FeedbackLevel,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Summarises an ATS score into a level plus strengths and improvements.
pub fn build_feedback(ats_score: u32, sections: &SectionMap, skills: &[String]) -> AtsFeedback {
    let mut strengths = Vec::new();
    if skills.len() >= 10 {
        strengths.push("Strong technical skill set".to_string());
    }
    if sections.contains(SectionKind::Experience) {
        strengths.push("Clear work experience section".to_string());
    }
    if sections.contains(SectionKind::Education) {
        strengths.push("Education background included".to_string());
    }

    let mut improvements = Vec::new();
    if ats_score < 70 {
        improvements.push("Add more industry-relevant keywords".to_string());
    }
    if !sections.contains(SectionKind::Summary) {
        improvements.push("Consider adding a professional summary".to_string());
    }
    if skills.len() < 5 {
        improvements.push("Expand your skills section".to_string());
    }
    if !sections.contains(SectionKind::Projects) {
        improvements.push("Include relevant projects or portfolio items".to_string());
    }

    AtsFeedback {
        score: ats_score,
        level: FeedbackLevel::from_score(ats_score),
        strengths,
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill-{i}")).collect()
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(FeedbackLevel::from_score(80), FeedbackLevel::Excellent);
        assert_eq!(FeedbackLevel::from_score(79), FeedbackLevel::Good);
        assert_eq!(FeedbackLevel::from_score(60), FeedbackLevel::Good);
        assert_eq!(FeedbackLevel::from_score(40), FeedbackLevel::Fair);
        assert_eq!(FeedbackLevel::from_score(39), FeedbackLevel::Poor);
    }

    #[test]
    fn test_complete_resume_has_only_strengths() {
        let mut sections = SectionMap::new();
        for kind in [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Projects,
        ] {
            sections.insert(kind, "body".into());
        }
        let feedback = build_feedback(88, &sections, &skills(12));
        assert_eq!(feedback.level, FeedbackLevel::Excellent);
        assert_eq!(feedback.strengths.len(), 3);
        assert!(feedback.improvements.is_empty());
    }

    #[test]
    fn test_sparse_resume_has_every_improvement() {
        let feedback = build_feedback(20, &SectionMap::new(), &skills(2));
        assert_eq!(feedback.level, FeedbackLevel::Poor);
        assert!(feedback.strengths.is_empty());
        assert_eq!(feedback.improvements.len(), 4);
        assert_eq!(feedback.improvements[0], "Add more industry-relevant keywords");
    }

    #[test]
    fn test_level_serializes_capitalised() {
        let json = serde_json::to_string(&FeedbackLevel::Excellent).unwrap();
        assert_eq!(json, r#""Excellent""#);
        let json = serde_json::to_string(&FeedbackLevel::Poor).unwrap();
        assert_eq!(json, r#""Poor""#);
    }
}
