use serde::{Deserialize, Serialize};

/// The résumé record the whole page is rendered from.
/// Loaded once at startup and shared read-only; collections render in storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    /// Headline competencies shown as chips inside the About card.
    #[serde(default)]
    pub highlights: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub awards: Vec<AwardEntry>,
    pub languages: Vec<LanguageEntry>,
    pub references: Vec<ReferenceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub program: String,
    pub school: String,
    pub detail: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardEntry {
    pub title: String,
    pub org: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}
