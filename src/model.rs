use serde::{Deserialize, Serialize};

/// Canonical résumé model handed to the templating layer.
///
/// Every field is present on every document: identity fields default to the
/// empty string and collections default to empty, so consumers never
/// null-check. Field names serialize in camelCase to match the template
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    // Identity
    pub name: String,
    pub title: String,
    pub degree: String,
    pub location: String,
    pub email: String,
    pub phone: String,

    // Personal links as the author wrote them (display text)
    pub website: String,
    pub github: String,
    pub linkedin: String,
    pub bluesky: String,

    // Derived hrefs, filled in after the override merge
    pub website_href: String,
    pub github_href: String,
    pub linkedin_href: String,

    pub summary: String,

    /// Flat skill tags, duplicates collapsed.
    pub skills: Vec<String>,
    /// Structured category/sub-item groupings parsed from the same bullets.
    pub key_skills: Vec<SkillCategory>,
    pub languages: Vec<String>,

    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub publications: Vec<PublicationEntry>,
    pub presentations: Vec<PresentationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
    pub subitems: Vec<SkillSubitem>,
}

/// Either a labeled group (`label` + `items`) or a free-text note
/// (`label` empty, `text` set).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSubitem {
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: String,
    /// `"Present"` when the source says so (any case) or leaves the end
    /// blank; otherwise the raw trailing text.
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    #[serde(flatten)]
    pub dates: DateRange,
    pub location: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    #[serde(flatten)]
    pub dates: DateRange,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    /// Link exactly as written in the source.
    pub link: String,
    /// Normalized absolute URL, filled in after the override merge.
    pub link_href: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationEntry {
    /// Inline-rendered main text plus any nested description sub-blocks.
    pub html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationEntry {
    /// Comma-normalized year list or range, possibly empty.
    pub years: String,
    pub title: String,
}

/// Result of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub data: ResumeDocument,
    /// True iff any parser recovered at least one non-empty field or list.
    pub has_structured: bool,
    /// Full-document HTML fallback; empty when `has_structured` is true.
    pub content_html: String,
}
