use std::sync::LazyLock;

use regex::Regex;

use crate::model::DateRange;

static DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(.+?)\s*[–—-]\s*(.+?)\s*$").unwrap());
static CONNECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(.+?)\s+(?:to|until)\s+(.+?)\s*$").unwrap());

/// The strategies are tried in declaration order; the dash form outranks the
/// textual connector even when both would match.
const STRATEGIES: &[fn(&str) -> Option<DateRange>] = &[dash_range, connector_range];

/// Extract a (start, end) pair from one Markdown-stripped line. Total: a
/// line matching no pattern becomes `{start: line, end: ""}`.
pub fn parse_date_range(line: &str) -> DateRange {
    let cleaned = line.trim();
    for strategy in STRATEGIES {
        if let Some(range) = strategy(cleaned) {
            return range;
        }
    }
    DateRange {
        start: cleaned.to_string(),
        end: String::new(),
    }
}

fn dash_range(s: &str) -> Option<DateRange> {
    let caps = DASH_RE.captures(s)?;
    Some(make_range(&caps[1], &caps[2]))
}

fn connector_range(s: &str) -> Option<DateRange> {
    let caps = CONNECTOR_RE.captures(s)?;
    Some(make_range(&caps[1], &caps[2]))
}

fn make_range(start: &str, end: &str) -> DateRange {
    let end = end.trim();
    let end = if end.eq_ignore_ascii_case("present") {
        "Present".to_string()
    } else {
        end.to_string()
    };
    DateRange {
        start: start.trim().to_string(),
        end,
    }
}

// ── Tests ──
