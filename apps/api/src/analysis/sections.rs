//! Section Segmenter: splits raw résumé text into named sections.
//!
//! Lines are matched against [`HEADER_RULES`] top to bottom; the first rule
//! whose prefix matches a short line wins. Everything before the first header
//! lands in `general`. A repeated header replaces the earlier body of that
//! kind (last write wins) but keeps the key at its first position.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Lines at or above this length are body text, never headers.
pub const HEADER_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    General,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Achievements => "achievements",
            SectionKind::General => "general",
        }
    }
}

/// A header rule: the section kind and the lower-case prefixes that open it.
pub struct HeaderRule {
    pub kind: SectionKind,
    pub prefixes: &'static [&'static str],
}

pub const HEADER_RULES: &[HeaderRule] = &[
    HeaderRule {
        kind: SectionKind::Summary,
        prefixes: &["summary", "profile", "objective", "about"],
    },
    HeaderRule {
        kind: SectionKind::Experience,
        prefixes: &["experience", "work", "employment", "career", "professional experience"],
    },
    HeaderRule {
        kind: SectionKind::Education,
        prefixes: &["education", "academic", "degree", "university", "college"],
    },
    HeaderRule {
        kind: SectionKind::Skills,
        prefixes: &["skills", "technical skills", "technologies", "tools", "competencies"],
    },
    HeaderRule {
        kind: SectionKind::Projects,
        prefixes: &["projects", "portfolio", "work samples", "personal projects"],
    },
    HeaderRule {
        kind: SectionKind::Certifications,
        prefixes: &["certifications", "certificates", "licenses", "credentials"],
    },
    HeaderRule {
        kind: SectionKind::Achievements,
        prefixes: &["achievements", "awards", "honors", "accomplishments"],
    },
];

/// Insertion-ordered section kind → body mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(SectionKind, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `body` under `kind`. An existing key keeps its position and has
    /// its body replaced.
    pub fn insert(&mut self, kind: SectionKind, body: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => *existing = body,
            None => self.entries.push((kind, body)),
        }
    }

    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, body)| body.as_str())
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.entries.iter().any(|(k, _)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> + '_ {
        self.entries.iter().map(|(k, body)| (*k, body.as_str()))
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, body) in &self.entries {
            map.serialize_entry(kind.as_str(), body)?;
        }
        map.end()
    }
}

/// Returns the section kind a line opens, if it reads as a header.
pub fn classify_header(line: &str) -> Option<SectionKind> {
    if line.chars().count() >= HEADER_MAX_LEN {
        return None;
    }
    let lower = line.to_lowercase();
    HEADER_RULES
        .iter()
        .find(|rule| rule.prefixes.iter().any(|p| lower.starts_with(p)))
        .map(|rule| rule.kind)
}

pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = SectionKind::General;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        match classify_header(line) {
            Some(kind) => {
                flush(&mut sections, current, &mut buffer);
                current = kind;
            }
            None => buffer.push(line),
        }
    }
    flush(&mut sections, current, &mut buffer);

    sections
}

/// Writes the buffered run under `kind`; an empty run writes nothing.
fn flush(sections: &mut SectionMap, kind: SectionKind, buffer: &mut Vec<&str>) {
    if buffer.is_empty() {
        return;
    }
    sections.insert(kind, buffer.join("\n").trim().to_string());
    buffer.clear();
}
