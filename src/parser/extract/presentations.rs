use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::model::PresentationEntry;
use crate::text;

static YEARS_COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}(?:\s*[–—-]\s*\d{4}|(?:\s*,\s*\d{4})*)?)\s*:\s*(.+)$").unwrap()
});
static YEARS_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}(?:\s*[–—-]\s*\d{4}|(?:\s*,\s*\d{4})*)?)\s+(.*)$").unwrap()
});
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());
static COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Year strategies in precedence order: leading year list/range plus colon,
/// the same without a colon, then a scan for any 4-digit years with the
/// whole string kept as the title.
const STRATEGIES: &[fn(&str) -> Option<PresentationEntry>] =
    &[years_with_colon, years_with_space];

pub fn extract_presentations(lines: &[String]) -> Vec<PresentationEntry> {
    text::flatten_bulleted_paragraphs(lines)
        .iter()
        .map(|entry| parse_entry(entry.trim()))
        .collect()
}

fn parse_entry(s: &str) -> PresentationEntry {
    for strategy in STRATEGIES {
        if let Some(entry) = strategy(s) {
            return entry;
        }
    }
    PresentationEntry {
        years: YEAR_RE.find_iter(s).map(|m| m.as_str()).join(", "),
        title: s.to_string(),
    }
}

fn years_with_colon(s: &str) -> Option<PresentationEntry> {
    let caps = YEARS_COLON_RE.captures(s)?;
    Some(PresentationEntry {
        years: normalize_years(&caps[1]),
        title: caps[2].trim().to_string(),
    })
}

fn years_with_space(s: &str) -> Option<PresentationEntry> {
    let caps = YEARS_SPACE_RE.captures(s)?;
    Some(PresentationEntry {
        years: normalize_years(&caps[1]),
        title: caps[2].trim().to_string(),
    })
}

fn normalize_years(s: &str) -> String {
    let s = COMMA_RE.replace_all(s, ", ");
    WS_RE.replace_all(&s, " ").trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn year_with_colon() {
        let items = extract_presentations(&lines(&["- 2023: Parsing at scale, RustConf"]));
        assert_eq!(items[0].years, "2023");
        assert_eq!(items[0].title, "Parsing at scale, RustConf");
    }

    #[test]
    fn year_list_comma_normalized() {
        let items = extract_presentations(&lines(&["- 2021 ,2022,  2023: Recurring workshop"]));
        assert_eq!(items[0].years, "2021, 2022, 2023");
    }

    #[test]
    fn year_range() {
        let items = extract_presentations(&lines(&["- 2019–2021: Annual keynote"]));
        assert_eq!(items[0].years, "2019–2021");
        assert_eq!(items[0].title, "Annual keynote");
    }

    #[test]
    fn year_without_colon() {
        let items = extract_presentations(&lines(&["- 2020 Lightning talk on codecs"]));
        assert_eq!(items[0].years, "2020");
        assert_eq!(items[0].title, "Lightning talk on codecs");
    }

    #[test]
    fn fallback_scans_all_years() {
        let items = extract_presentations(&lines(&["- Keynote (given 2018 and again 2020)"]));
        assert_eq!(items[0].years, "2018, 2020");
        assert_eq!(items[0].title, "Keynote (given 2018 and again 2020)");
    }

    #[test]
    fn no_years_at_all() {
        let items = extract_presentations(&lines(&["- Untitled talk"]));
        assert_eq!(items[0].years, "");
        assert_eq!(items[0].title, "Untitled talk");
    }

    #[test]
    fn soft_wrapped_entries_flattened_first() {
        let items = extract_presentations(&lines(&[
            "- 2022: A very long talk title",
            "  wrapped onto a second line",
        ]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A very long talk title wrapped onto a second line");
    }
}
