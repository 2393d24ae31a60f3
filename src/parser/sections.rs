use std::sync::LazyLock;

use regex::Regex;

static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.*)$").unwrap());

/// One second-level-heading-delimited region, keyed by its upper-cased
/// heading text.
#[derive(Debug, Clone)]
pub struct Section {
    pub key: String,
    pub lines: Vec<String>,
}

/// Split a Markdown body into named sections. Lines before the first `##`
/// heading form an unkeyed preamble and are discarded; headings with no
/// text are dropped. Absence of any heading yields an empty vec.
pub fn split_sections(markdown: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for line in markdown.lines() {
        if let Some(caps) = H2_RE.captures(line) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            let key = caps[1].trim().to_uppercase();
            if !key.is_empty() {
                current = Some(Section { key, lines: Vec::new() });
            }
            continue;
        }
        if let Some(cur) = current.as_mut() {
            cur.lines.push(line.to_string());
        }
    }
    if let Some(done) = current {
        sections.push(done);
    }

    sections
}

/// Body lines of the section with the given upper-cased key. When a
/// heading repeats, the last occurrence wins, as in a map built by
/// successive inserts.
pub fn find<'a>(sections: &'a [Section], key: &str) -> Option<&'a [String]> {
    sections
        .iter()
        .rev()
        .find(|s| s.key == key)
        .map(|s| s.lines.as_slice())
}

/// First present key wins among a synonym group.
pub fn find_any<'a>(sections: &'a [Section], keys: &[&str]) -> Option<&'a [String]> {
    keys.iter().find_map(|k| find(sections, k))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_h2_and_uppercases_keys() {
        let md = "intro line\n\n## Experience\na\nb\n\n## key skills\n- x\n";
        let sections = split_sections(md);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key, "EXPERIENCE");
        assert_eq!(sections[0].lines, vec!["a", "b", ""]);
        assert_eq!(sections[1].key, "KEY SKILLS");
    }

    #[test]
    fn preamble_discarded() {
        let sections = split_sections("name line\nanother\n## Summary\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "SUMMARY");
    }

    #[test]
    fn h3_lines_stay_in_body() {
        let sections = split_sections("## Experience\n### Acme: Engineer\n- did x");
        assert_eq!(sections[0].lines[0], "### Acme: Engineer");
    }

    #[test]
    fn no_headings_yields_empty() {
        assert!(split_sections("just\nplain\ntext").is_empty());
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn empty_heading_dropped() {
        let sections = split_sections("##   \norphan line\n## Real\nbody");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "REAL");
    }

    #[test]
    fn repeated_heading_last_occurrence_wins() {
        let sections = split_sections("## Summary\nfirst body\n## Summary\nsecond body\n");
        let lines = find(&sections, "SUMMARY").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "second body");
    }

    #[test]
    fn find_any_first_present_wins() {
        let md = "## Products\n- a\n## Open Source Software\n- b";
        let sections = split_sections(md);
        let lines = find_any(
            &sections,
            &["PRODUCTS AND OPEN SOURCE SOFTWARE", "PRODUCTS", "OPEN SOURCE SOFTWARE"],
        )
        .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "- a");
    }
}
