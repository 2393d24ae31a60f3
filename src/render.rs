//! Minimal Markdown-to-HTML collaborator.
//!
//! Two entry points: [`render_inline`] for emphasis/links embedded in
//! larger structures (publication titles, descriptions) and
//! [`render_document`] for the full-document fallback used when no
//! structured data was recovered. Both route every href through
//! [`crate::links::to_absolute_url`] so link canonicalization is identical
//! on both paths.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::links;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b_([^_]+)_\b").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s+(.*)$").unwrap());

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render inline constructs only: links, bold, italic. Text is HTML-escaped
/// and hrefs are normalized; no block-level wrapping.
pub fn render_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for caps in LINK_RE.captures_iter(s) {
        let m = caps.get(0).unwrap();
        out.push_str(&render_emphasis(&s[last..m.start()]));
        let href = links::to_absolute_url(&caps[2]);
        out.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&href),
            render_emphasis(&caps[1])
        ));
        last = m.end();
    }
    out.push_str(&render_emphasis(&s[last..]));
    out
}

fn render_emphasis(s: &str) -> String {
    let escaped = escape_html(s);
    let s = BOLD_RE.replace_all(&escaped, |c: &Captures| format!("<strong>{}</strong>", &c[1]));
    let s = STAR_RE.replace_all(&s, |c: &Captures| format!("<em>{}</em>", &c[1]));
    UNDERSCORE_RE
        .replace_all(&s, |c: &Captures| format!("<em>{}</em>", &c[1]))
        .into_owned()
}

/// Render a whole Markdown body: headings, bullet lists, and paragraphs.
/// Nested list levels are flattened; anything non-blank ends up in the
/// output, so the result is non-empty for any non-empty input.
pub fn render_document(markdown: &str) -> String {
    let mut out = String::new();
    let mut list_open = false;
    let mut paragraph: Vec<String> = Vec::new();

    let close_paragraph = |out: &mut String, paragraph: &mut Vec<String>| {
        if !paragraph.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", render_inline(&paragraph.join(" "))));
            paragraph.clear();
        }
    };
    let close_list = |out: &mut String, list_open: &mut bool| {
        if *list_open {
            out.push_str("</ul>\n");
            *list_open = false;
        }
    };

    for line in markdown.lines() {
        if line.trim().is_empty() {
            close_paragraph(&mut out, &mut paragraph);
            close_list(&mut out, &mut list_open);
            continue;
        }
        if let Some(caps) = HEADING_RE.captures(line) {
            close_paragraph(&mut out, &mut paragraph);
            close_list(&mut out, &mut list_open);
            let level = caps[1].len();
            out.push_str(&format!("<h{level}>{}</h{level}>\n", render_inline(caps[2].trim())));
            continue;
        }
        if let Some(caps) = BULLET_RE.captures(line) {
            close_paragraph(&mut out, &mut paragraph);
            if !list_open {
                out.push_str("<ul>\n");
                list_open = true;
            }
            out.push_str(&format!("<li>{}</li>\n", render_inline(caps[1].trim())));
            continue;
        }
        paragraph.push(line.trim().to_string());
    }
    close_paragraph(&mut out, &mut paragraph);
    close_list(&mut out, &mut list_open);

    out
}

// ── Tests ──
