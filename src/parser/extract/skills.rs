use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{SkillCategory, SkillSubitem};
use crate::text;

static FLAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(?:\*\*([^*]+)\*\*|([^:]+))\s*:\s*(.+)$").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s+(.*)$").unwrap());
static BOLD_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*\s*:\s*(.*)$").unwrap());

/// Flat skill-tag pass: every `- Label: v1, v2 and v3` bullet contributes
/// its value tokens. Duplicates collapse, first-seen order is kept.
pub fn extract_flat(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for raw in lines {
        let tail = if let Some(caps) = FLAT_RE.captures(raw) {
            Some(caps[3].to_string())
        } else {
            // Bullet whose label regex did not bite but which still carries
            // a colon: take everything after the first one
            BULLET_RE
                .captures(raw)
                .and_then(|c| c[1].split_once(':').map(|(_, after)| after.to_string()))
        };
        let Some(tail) = tail else { continue };
        for token in text::split_list(&tail) {
            if seen.insert(token.clone()) {
                skills.push(token);
            }
        }
    }
    skills
}

/// Structured pass over the same bullets: indentation ≤1 opens a category,
/// deeper bullets attach to the most recent one. Runs independently of the
/// flat pass and may disagree with it; both outputs are kept.
pub fn extract_structured(lines: &[String]) -> Vec<SkillCategory> {
    let mut categories: Vec<SkillCategory> = Vec::new();

    for raw in lines {
        let Some(caps) = BULLET_RE.captures(raw) else { continue };
        let bullet_text = &caps[1];
        let cleaned = text::strip_inline(bullet_text);

        if text::indent_width(raw) <= 1 {
            // A bold prefix only names a category when a colon follows it;
            // a colon-less bullet stays a bare category in full
            let (category, rest) = if let Some(bold) = BOLD_PREFIX_RE.captures(bullet_text.trim()) {
                (text::strip_inline(&bold[1]), bold[2].trim().to_string())
            } else if let Some((left, right)) = cleaned.split_once(':') {
                (left.trim().to_string(), right.trim().to_string())
            } else {
                (cleaned.clone(), String::new())
            };
            let items = if rest.is_empty() { Vec::new() } else { text::split_list(&rest) };
            categories.push(SkillCategory {
                category,
                items,
                subitems: Vec::new(),
            });
        } else {
            // Nested bullet with no open category yet is dropped
            let Some(current) = categories.last_mut() else { continue };
            if let Some((label, tail)) = cleaned.split_once(':') {
                current.subitems.push(SkillSubitem {
                    label: label.trim().to_string(),
                    items: text::split_list(tail),
                    text: String::new(),
                });
            } else {
                current.subitems.push(SkillSubitem {
                    label: String::new(),
                    items: Vec::new(),
                    text: cleaned,
                });
            }
        }
    }
    categories
}

// ── Tests ──
