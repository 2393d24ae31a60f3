pub mod contact;
pub mod experience;
pub mod presentations;
pub mod projects;
pub mod publications;
pub mod skills;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ResumeDocument;
use crate::parser::sections::{self, Section};
use crate::text;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const PROJECT_KEYS: &[&str] = &[
    "PRODUCTS AND OPEN SOURCE SOFTWARE",
    "PRODUCTS",
    "OPEN SOURCE SOFTWARE",
];
const SKILLS_KEYS: &[&str] = &["KEY SKILLS", "SKILLS"];
const PRESENTATION_KEYS: &[&str] = &[
    "SELECTED CONFERENCE PRESENTATIONS",
    "CONFERENCE PRESENTATIONS",
    "PRESENTATIONS",
];
const PUBLICATION_KEYS: &[&str] = &["KEY SCIENTIFIC PUBLICATIONS", "PUBLICATIONS"];

/// Run every section extractor over the split document. Returns the parsed
/// model and whether any extractor recovered data; unrecognized sections
/// are ignored.
pub fn extract_all(sections: &[Section]) -> (ResumeDocument, bool) {
    let mut doc = ResumeDocument::default();
    let mut any = false;

    if let Some(lines) = sections::find(sections, "CONTACT") {
        any |= contact::extract_contact(lines, &mut doc);
    }
    if let Some(lines) = sections::find(sections, "WEB PRESENCE") {
        any |= contact::extract_web_presence(lines, &mut doc);
    }
    if let Some(lines) = sections::find(sections, "SUMMARY") {
        let summary = text::strip_inline(&WS_RE.replace_all(&lines.join(" "), " "));
        if !summary.is_empty() {
            doc.summary = summary;
            any = true;
        }
    }
    if let Some(lines) = sections::find(sections, "EXPERIENCE") {
        let entries = experience::extract_experience(lines);
        if !entries.is_empty() {
            doc.experience = entries;
            any = true;
        }
    }
    if let Some(lines) = sections::find(sections, "EDUCATION") {
        let entries = experience::extract_education(lines);
        if !entries.is_empty() {
            doc.education = entries;
            any = true;
        }
    }
    if let Some(lines) = sections::find_any(sections, PROJECT_KEYS) {
        let entries = projects::extract_projects(lines);
        if !entries.is_empty() {
            doc.projects = entries;
            any = true;
        }
    }
    if let Some(lines) = sections::find_any(sections, SKILLS_KEYS) {
        let flat = skills::extract_flat(lines);
        let structured = skills::extract_structured(lines);
        if !flat.is_empty() {
            doc.skills = flat;
            any = true;
        }
        if !structured.is_empty() {
            doc.key_skills = structured;
            any = true;
        }
    }
    if let Some(lines) = sections::find(sections, "LANGUAGES") {
        let langs = text::bullet_items(lines);
        if !langs.is_empty() {
            doc.languages = langs;
            any = true;
        }
    }
    if let Some(lines) = sections::find_any(sections, PRESENTATION_KEYS) {
        let entries = presentations::extract_presentations(lines);
        if !entries.is_empty() {
            doc.presentations = entries;
            any = true;
        }
    }
    if let Some(lines) = sections::find_any(sections, PUBLICATION_KEYS) {
        let entries = publications::extract_publications(lines);
        if !entries.is_empty() {
            doc.publications = entries;
            any = true;
        }
    }

    (doc, any)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::split_sections;

    fn extract(md: &str) -> (ResumeDocument, bool) {
        extract_all(&split_sections(md))
    }

    #[test]
    fn full_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/sample.md").unwrap();
        let (doc, any) = extract(&md);
        assert!(any);
        assert_eq!(doc.name, "Jane Doe");
        assert_eq!(doc.title, "Staff Software Engineer");
        assert_eq!(doc.website, "jane.dev");
        assert_eq!(doc.github, "@janedoe");
        assert!(!doc.summary.is_empty());
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.projects.len(), 2);
        assert!(doc.skills.contains(&"Rust".to_string()));
        assert!(!doc.key_skills.is_empty());
        assert_eq!(doc.languages.len(), 2);
        assert_eq!(doc.presentations.len(), 2);
        assert_eq!(doc.publications.len(), 2);
    }

    #[test]
    fn nothing_recognized() {
        let (doc, any) = extract("# Title\n\nJust a paragraph.\n\n## Hobbies\n- chess\n");
        assert!(!any);
        assert_eq!(doc, ResumeDocument::default());
    }

    #[test]
    fn summary_collapsed_to_one_paragraph() {
        let (doc, any) = extract("## Summary\nBuilds  parsers\nand *pipelines*.\n");
        assert!(any);
        assert_eq!(doc.summary, "Builds parsers and pipelines.");
    }

    #[test]
    fn skills_synonym_key() {
        let (doc, _) = extract("## Skills\n- Langs: Rust, Go\n");
        assert_eq!(doc.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn empty_sections_do_not_set_has_structured() {
        let (_, any) = extract("## Experience\n\n## Languages\nprose, not bullets\n");
        assert!(!any);
    }
}
