pub mod blocks;
pub mod dates;
pub mod extract;
pub mod sections;

use crate::model::ResumeDocument;

/// Two-pass pipeline: markdown → named sections → extracted model.
/// The boolean reports whether any structured data was recovered.
pub fn parse_structured(markdown: &str) -> (ResumeDocument, bool) {
    let sections = sections::split_sections(markdown);
    extract::extract_all(&sections)
}
