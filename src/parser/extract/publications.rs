use std::sync::LazyLock;

use regex::Regex;

use crate::model::PublicationEntry;
use crate::render;

static TOP_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s+(.*)$").unwrap());
static NESTED_PLUS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+\+\s+(.*)$").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Default)]
struct Draft {
    main_parts: Vec<String>,
    descriptions: Vec<String>,
}

impl Draft {
    fn close(self, items: &mut Vec<PublicationEntry>) {
        let main = WS_RE.replace_all(&self.main_parts.join(" "), " ").trim().to_string();
        if main.is_empty() {
            return;
        }
        let mut html = render::render_inline(&main);
        for desc in &self.descriptions {
            let inline = render::render_inline(desc);
            html.push_str(&format!("<div class=\"pub-description\"><em>{inline}</em></div>"));
        }
        items.push(PublicationEntry { html });
    }
}

/// Group section lines into publication items: a top-level bullet opens an
/// item, soft-wrapped lines continue its main text, indented `+` lines
/// collect as emphasized descriptions, and a blank line closes it. Items
/// whose main text assembles to nothing are dropped.
pub fn extract_publications(lines: &[String]) -> Vec<PublicationEntry> {
    let mut items = Vec::new();
    let mut open: Option<Draft> = None;

    for raw in lines {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if let Some(draft) = open.take() {
                draft.close(&mut items);
            }
            continue;
        }

        if let Some(caps) = TOP_BULLET_RE.captures(raw) {
            if let Some(draft) = open.take() {
                draft.close(&mut items);
            }
            open = Some(Draft {
                main_parts: vec![caps[1].trim().to_string()],
                descriptions: Vec::new(),
            });
            continue;
        }

        if let Some(draft) = open.as_mut() {
            if let Some(caps) = NESTED_PLUS_RE.captures(raw) {
                draft.descriptions.push(caps[1].trim().to_string());
            } else {
                draft.main_parts.push(trimmed.to_string());
            }
        }
    }
    if let Some(draft) = open {
        draft.close(&mut items);
    }

    items
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn soft_wrapped_main_text_joined() {
        let pubs = extract_publications(&lines(&[
            "- Doe J. *A Study of Parsers.*",
            "  Journal of Software, 2021.",
        ]));
        assert_eq!(pubs.len(), 1);
        assert!(pubs[0].html.contains("<em>A Study of Parsers.</em>"));
        assert!(pubs[0].html.contains("Journal of Software, 2021."));
    }

    #[test]
    fn nested_plus_becomes_description_block() {
        let pubs = extract_publications(&lines(&[
            "- Doe J. Main paper.",
            "  + Winner of the **best paper** award.",
        ]));
        assert_eq!(pubs.len(), 1);
        let html = &pubs[0].html;
        assert!(html.contains("<div class=\"pub-description\"><em>"));
        assert!(html.contains("<strong>best paper</strong>"));
    }

    #[test]
    fn blank_line_separates_items() {
        let pubs = extract_publications(&lines(&["- first", "", "- second"]));
        assert_eq!(pubs.len(), 2);
    }

    #[test]
    fn empty_main_dropped() {
        let pubs = extract_publications(&lines(&["- ", "", "stray continuation without bullet"]));
        assert!(pubs.is_empty());
    }
}
