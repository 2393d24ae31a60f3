use std::sync::LazyLock;

use regex::Regex;

use crate::model::DateRange;
use crate::text;

use super::dates;

static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.*)$").unwrap());
static AT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(.*?)\s+at\s+(.*)$").unwrap());

/// One third-level-heading-delimited entry inside EXPERIENCE/EDUCATION.
#[derive(Debug, Clone)]
pub struct EntryBlock {
    pub heading: String,
    pub body: Vec<String>,
}

/// Fields recovered from an entry heading. `primary` is the role (or
/// degree); `secondary` the company (or school).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingFields {
    pub primary: String,
    pub secondary: String,
}

/// Split a section body on `###` headings. Lines before the first heading
/// are ignored; heading text is kept raw (Markdown stripped later).
pub fn collect_entry_blocks(lines: &[String]) -> Vec<EntryBlock> {
    let mut blocks: Vec<EntryBlock> = Vec::new();
    let mut current: Option<EntryBlock> = None;

    for line in lines {
        if let Some(caps) = H3_RE.captures(line) {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            current = Some(EntryBlock {
                heading: caps[1].trim().to_string(),
                body: Vec::new(),
            });
            continue;
        }
        if let Some(cur) = current.as_mut() {
            cur.body.push(line.clone());
        }
    }
    if let Some(done) = current {
        blocks.push(done);
    }

    blocks
}

/// Heading strategies in precedence order: explicit `Secondary: Primary`
/// split, then `Primary at Secondary`, then the whole heading as primary.
const HEADING_STRATEGIES: &[fn(&str) -> Option<HeadingFields>] = &[colon_split, at_pattern];

/// Assign primary/secondary fields from a Markdown-stripped entry heading.
pub fn split_heading_fields(heading: &str) -> HeadingFields {
    let cleaned = text::strip_inline(heading);
    for strategy in HEADING_STRATEGIES {
        if let Some(fields) = strategy(&cleaned) {
            return fields;
        }
    }
    HeadingFields {
        primary: cleaned,
        secondary: String::new(),
    }
}

fn colon_split(heading: &str) -> Option<HeadingFields> {
    let (left, right) = heading.split_once(':')?;
    Some(HeadingFields {
        primary: right.trim().to_string(),
        secondary: left.trim().to_string(),
    })
}

fn at_pattern(heading: &str) -> Option<HeadingFields> {
    let caps = AT_RE.captures(heading)?;
    Some(HeadingFields {
        primary: caps[1].trim().to_string(),
        secondary: caps[2].trim().to_string(),
    })
}

/// Entry body split into its date range and stripped bullet lines. The
/// first non-bullet line (blank lines removed) is the date line; every
/// bullet becomes a highlight in source order.
pub fn parse_entry_body(body: &[String]) -> (DateRange, Vec<String>) {
    let date_line = body
        .iter()
        .map(|l| l.as_str())
        .filter(|l| !l.trim().is_empty())
        .find(|l| !text::is_bullet(l));
    let range = date_line
        .map(|l| dates::parse_date_range(&text::strip_inline(l)))
        .unwrap_or_default();
    let highlights = text::bullet_items(body);
    (range, highlights)
}

// ── Tests ──
