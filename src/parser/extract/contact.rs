use std::sync::LazyLock;

use regex::Regex;

use crate::model::ResumeDocument;
use crate::text;

static KV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z \-]*)\s*:\s*(.+)$").unwrap());
static LINK_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[([^\]]+)\]\(([^)]+)\)").unwrap());
static BARE_URL_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(https?://\S+)").unwrap());

const RECOGNIZED_KEYS: &[&str] = &["name", "title", "degree", "location", "email", "phone"];

/// Parse `key: value` lines from a CONTACT section into identity fields.
/// Unrecognized keys are ignored. Returns true if any field was set.
pub fn extract_contact(lines: &[String], doc: &mut ResumeDocument) -> bool {
    let mut any = false;
    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = KV_RE.captures(line) else { continue };
        let key = caps[1].to_lowercase();
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");
        if !RECOGNIZED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let value = text::strip_inline(caps[2].trim());
        match key.as_str() {
            "name" => doc.name = value,
            "title" => doc.title = value,
            "degree" => doc.degree = value,
            "location" => doc.location = value,
            "email" => doc.email = value,
            "phone" => doc.phone = value,
            _ => continue,
        }
        any = true;
    }
    any
}

/// Classify WEB PRESENCE bullet links by host: github, linkedin, bluesky,
/// and the first non-platform link as the website. Display text is kept as
/// written; when a bullet is a bare URL the URL doubles as the text.
pub fn extract_web_presence(lines: &[String], doc: &mut ResumeDocument) -> bool {
    let mut links: Vec<(String, String)> = Vec::new();
    for raw in lines {
        if let Some(caps) = LINK_BULLET_RE.captures(raw) {
            links.push((caps[1].trim().to_string(), caps[2].trim().to_string()));
        } else if let Some(caps) = BARE_URL_BULLET_RE.captures(raw) {
            links.push((caps[1].to_string(), caps[1].to_string()));
        }
    }

    let mut any = false;
    for (text, url) in &links {
        let lower = url.to_lowercase();
        let display = if text.is_empty() { url } else { text };
        if lower.contains("github.com") {
            doc.github = display.clone();
            any = true;
        } else if lower.contains("linkedin.com") {
            doc.linkedin = display.clone();
            any = true;
        } else if lower.contains("bsky.app") {
            doc.bluesky = display.clone();
            any = true;
        }
    }
    if let Some((text, url)) = links.iter().find(|(_, url)| {
        let lower = url.to_lowercase();
        !lower.contains("github.com") && !lower.contains("linkedin.com") && !lower.contains("bsky.app")
    }) {
        doc.website = if text.is_empty() { url.clone() } else { text.clone() };
        any = true;
    }
    any
}

// ── Tests ──
