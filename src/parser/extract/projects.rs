use std::sync::LazyLock;

use regex::Regex;

use crate::model::ProjectEntry;
use crate::text;

static LINKED_WITH_COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[([^\]]+)\]\(([^)]+)\)\s*:\s*(.*)$").unwrap());
static LINKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[([^\]]+)\]\(([^)]+)\)\s*(.*)$").unwrap());

/// Parse `- [Name](url): summary` and `- [Name](url) summary` bullets.
/// Bullets without a link are not project entries. The raw link is kept;
/// its normalized href is derived after the override merge.
pub fn extract_projects(lines: &[String]) -> Vec<ProjectEntry> {
    let mut items = Vec::new();
    for raw in lines {
        let caps = LINKED_WITH_COLON_RE
            .captures(raw)
            .or_else(|| LINKED_RE.captures(raw));
        let Some(caps) = caps else { continue };
        items.push(ProjectEntry {
            name: text::strip_inline(&caps[1]),
            link: caps[2].trim().to_string(),
            link_href: String::new(),
            summary: text::strip_inline(&caps[3]),
        });
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
    fn colon_form() {
        let items = extract_projects(&lines(&["- [mdcv](github.com/jane/mdcv): résumé renderer"]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "mdcv");
        assert_eq!(items[0].link, "github.com/jane/mdcv");
        assert_eq!(items[0].summary, "résumé renderer");
    }

    #[test]
    fn space_form() {
        let items = extract_projects(&lines(&["- [tool](https://tool.dev) small **CLI** helper"]));
        assert_eq!(items[0].summary, "small CLI helper");
    }

    #[test]
    fn linkless_bullets_skipped() {
        assert!(extract_projects(&lines(&["- plain bullet", "prose line"])).is_empty());
    }

    #[test]
    fn empty_summary_allowed() {
        let items = extract_projects(&lines(&["- [x](https://x.dev)"]));
        assert_eq!(items[0].summary, "");
    }
}
