//! Keyword dictionaries used by the extractor, both scoring tracks and the
//! suggestion rules. Every list lives here exactly once; components receive a
//! `&Lexicon` instead of reaching for module-level globals.

use crate::analysis::sections::SectionKind;

/// One named group of the skill dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "languages",
        terms: &[
            "javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust", "swift",
            "typescript", "kotlin", "scala", "r", "matlab", "sql", "html", "css",
        ],
    },
    SkillCategory {
        name: "frameworks",
        terms: &[
            "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
            "bootstrap", "jquery", "redux", "nextjs", "gatsby", "nuxt",
        ],
    },
    SkillCategory {
        name: "databases",
        terms: &[
            "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra", "oracle",
            "sqlite", "dynamodb",
        ],
    },
    SkillCategory {
        name: "cloud_devops",
        terms: &[
            "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
            "ci/cd", "terraform", "ansible", "linux", "windows", "macos", "visual studio",
            "intellij", "eclipse", "postman", "figma", "sketch", "photoshop",
        ],
    },
    SkillCategory {
        name: "soft_skills",
        terms: &[
            "leadership", "communication", "teamwork", "problem solving", "project management",
            "agile", "scrum", "analytical thinking",
        ],
    },
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "degree", "university", "college", "bs", "ba",
    "ms", "ma", "mba", "engineering", "computer science", "business",
];

/// Terms behind the standalone `keywordScore`.
pub const SCORE_KEYWORDS: &[&str] = &[
    "javascript", "python", "react", "node", "html", "css", "sql", "git", "management",
    "leadership", "communication", "project", "team", "analysis",
];

/// Terms behind the keyword-density slice of `atsScore`.
pub const ATS_KEYWORDS: &[&str] = &[
    "javascript", "python", "react", "node", "html", "css", "sql", "git", "management",
    "leadership", "communication", "project", "team", "analysis", "problem solving",
    "collaboration", "agile", "scrum",
];

/// Action verbs for the standalone `contentScore`.
pub const CONTENT_ACTION_VERBS: &[&str] = &[
    "developed", "managed", "led", "created", "implemented", "designed", "built", "optimized",
    "achieved", "improved", "increased", "reduced",
];

/// Action verbs for the content-quality slice of `atsScore`.
pub const ATS_ACTION_VERBS: &[&str] = &[
    "developed", "managed", "led", "created", "implemented", "designed", "built", "optimized",
    "achieved", "improved", "increased", "reduced", "coordinated", "executed", "delivered",
    "established",
];

pub const TECH_TERMS: &[&str] = &[
    "api", "database", "framework", "algorithm", "architecture", "cloud", "agile", "scrum",
    "ci/cd", "devops", "microservices", "docker",
];

/// Section words the ATS track looks for anywhere in the raw text.
pub const ATS_SECTION_WORDS: &[&str] = &["experience", "education", "skills"];

pub const REQUIRED_SECTIONS: &[SectionKind] =
    &[SectionKind::Experience, SectionKind::Education, SectionKind::Skills];

pub const OPTIONAL_SECTIONS: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Projects,
    SectionKind::Certifications,
];

pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Immutable bundle of every dictionary the engine consults.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub skill_categories: &'static [SkillCategory],
    pub education_keywords: &'static [&'static str],
    pub score_keywords: &'static [&'static str],
    pub ats_keywords: &'static [&'static str],
    pub content_action_verbs: &'static [&'static str],
    pub ats_action_verbs: &'static [&'static str],
    pub tech_terms: &'static [&'static str],
    pub ats_section_words: &'static [&'static str],
    pub required_sections: &'static [SectionKind],
    pub optional_sections: &'static [SectionKind],
    pub bullet_markers: &'static [char],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            skill_categories: SKILL_CATEGORIES,
            education_keywords: EDUCATION_KEYWORDS,
            score_keywords: SCORE_KEYWORDS,
            ats_keywords: ATS_KEYWORDS,
            content_action_verbs: CONTENT_ACTION_VERBS,
            ats_action_verbs: ATS_ACTION_VERBS,
            tech_terms: TECH_TERMS,
            ats_section_words: ATS_SECTION_WORDS,
            required_sections: REQUIRED_SECTIONS,
            optional_sections: OPTIONAL_SECTIONS,
            bullet_markers: BULLET_MARKERS,
        }
    }
}

impl Lexicon {
    /// Skill terms in dictionary scan order (category order, then term order).
    pub fn skill_terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.skill_categories
            .iter()
            .flat_map(|category| category.terms.iter().copied())
    }

    pub fn has_bullet_marker(&self, text: &str) -> bool {
        text.contains(self.bullet_markers)
    }
}

/// Number of `terms` that occur as a substring of the already lower-cased `text`.
pub fn count_present(text_lower: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text_lower.contains(*term)).count()
}
