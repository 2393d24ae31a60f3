use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s+(.*)$").unwrap());
static LIST_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",|\band\b").unwrap());

/// Remove inline Markdown: emphasis markers, links reduced to their text,
/// internal whitespace collapsed.
pub fn strip_inline(s: &str) -> String {
    let s = BOLD_RE.replace_all(s, "$1");
    let s = STAR_RE.replace_all(&s, "$1");
    let s = UNDERSCORE_RE.replace_all(&s, "$1");
    let s = LINK_RE.replace_all(&s, "$1");
    WS_RE.replace_all(&s, " ").trim().to_string()
}

/// Split a value tail on commas or the standalone word "and", stripping
/// Markdown from each token. Empty tokens are dropped.
pub fn split_list(s: &str) -> Vec<String> {
    LIST_SEP_RE
        .split(s)
        .map(strip_inline)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Extract `- ` bullet contents from a line batch, Markdown-stripped.
pub fn bullet_items(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|l| BULLET_RE.captures(l))
        .map(|c| strip_inline(&c[1]))
        .collect()
}

/// True for `- ` bullet lines at any indentation.
pub fn is_bullet(line: &str) -> bool {
    BULLET_RE.is_match(line)
}

/// Leading-whitespace width with tabs counted as four columns.
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Merge soft-wrapped top-level bullets into one plain string per bullet.
/// A new bullet or a blank line closes the open entry; non-bullet lines
/// between them are continuations joined with a space.
pub fn flatten_bulleted_paragraphs(lines: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut open: Option<String> = None;

    for line in lines {
        if let Some(caps) = BULLET_RE.captures(line) {
            if let Some(prev) = open.take() {
                if !prev.trim().is_empty() {
                    out.push(strip_inline(&prev));
                }
            }
            open = Some(caps[1].trim().to_string());
            continue;
        }
        if line.trim().is_empty() {
            if let Some(done) = open.take() {
                if !done.trim().is_empty() {
                    out.push(strip_inline(&done));
                }
            }
        } else if let Some(cur) = open.as_mut() {
            cur.push(' ');
            cur.push_str(line.trim());
        }
    }
    if let Some(last) = open {
        if !last.trim().is_empty() {
            out.push(strip_inline(&last));
        }
    }
    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_emphasis_and_links() {
        assert_eq!(strip_inline("**Rust** and *Go*"), "Rust and Go");
        assert_eq!(strip_inline("_quiet_ [site](https://x.dev) text"), "quiet site text");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(strip_inline("a   b\t c"), "a b c");
    }

    #[test]
    fn split_list_on_commas_and_and() {
        assert_eq!(split_list("Rust, Go and Python"), vec!["Rust", "Go", "Python"]);
    }

    #[test]
    fn split_list_does_not_break_inside_words() {
        // "and" only splits as a standalone word
        assert_eq!(split_list("Pandas, Command line"), vec!["Pandas", "Command line"]);
    }

    #[test]
    fn bullets_stripped() {
        let items = bullet_items(&lines(&["- **English** (native)", "not a bullet", "  - Spanish"]));
        assert_eq!(items, vec!["English (native)", "Spanish"]);
    }

    #[test]
    fn indent_counts_tabs_as_four() {
        assert_eq!(indent_width("\t- x"), 4);
        assert_eq!(indent_width("  - x"), 2);
        assert_eq!(indent_width("- x"), 0);
    }

    #[test]
    fn flatten_merges_soft_wraps() {
        let out = flatten_bulleted_paragraphs(&lines(&[
            "- 2023: A talk about",
            "  parsing things",
            "",
            "- 2024: Another talk",
        ]));
        assert_eq!(out, vec!["2023: A talk about parsing things", "2024: Another talk"]);
    }

    #[test]
    fn flatten_new_bullet_closes_previous() {
        let out = flatten_bulleted_paragraphs(&lines(&["- one", "- two"]));
        assert_eq!(out, vec!["one", "two"]);
    }

    #[test]
    fn flatten_ignores_leading_non_bullets() {
        let out = flatten_bulleted_paragraphs(&lines(&["stray line", "- kept"]));
        assert_eq!(out, vec!["kept"]);
    }
}
