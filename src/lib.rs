//! Structured résumé extraction from loosely-formatted Markdown.
//!
//! The pipeline recovers identity, links, work history, education, skills,
//! publications, and presentations from free-form headings, bullets, and
//! inline text, then applies the front-matter override merge. It is a pure
//! function of its input: no I/O, no retained state, and no input shape
//! can make it fail.

pub mod frontmatter;
pub mod links;
pub mod merge;
pub mod model;
pub mod parser;
pub mod render;
pub mod text;

use serde_json::{Map, Value};

pub use model::{Extraction, ResumeDocument};

/// Extract the canonical model from a Markdown body, applying an optional
/// override map on top of whatever was parsed. When no structured data is
/// recovered the full-document HTML fallback is rendered instead.
pub fn extract(markdown: &str, overrides: Option<&Map<String, Value>>) -> Extraction {
    let (parsed, has_structured) = parser::parse_structured(markdown);
    let mut data = merge::merge_override(parsed, overrides);
    merge::finalize_links(&mut data);

    let content_html = if has_structured {
        String::new()
    } else {
        render::render_document(markdown)
    };

    Extraction {
        data,
        has_structured,
        content_html,
    }
}

// ── Tests ──
