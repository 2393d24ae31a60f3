//! Canonicalize user-supplied link text into scheme-correct hrefs.
//!
//! Every function here is total: any string in, some string out, never a
//! panic. Only hrefs are normalized; display text is left to the caller.

use std::sync::LazyLock;

use regex::Regex;

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").unwrap());
static GITHUB_HOST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^([^/]*\.)?github\.com").unwrap());
static LINKEDIN_HOST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^([^/]*\.)?linkedin\.com").unwrap());

fn strip_scheme(s: &str) -> &str {
    let lower = s.to_lowercase();
    if lower.starts_with("https://") {
        &s[8..]
    } else if lower.starts_with("http://") {
        &s[7..]
    } else {
        s
    }
}

/// Make an arbitrary link absolute and https, leaving mailto/tel, anchors,
/// and root-relative paths alone.
pub fn to_absolute_url(s: &str) -> String {
    let v = s.trim();
    if v.is_empty() {
        return String::new();
    }
    let lower = v.to_lowercase();
    if lower.starts_with("mailto:") || lower.starts_with("tel:") {
        return v.to_string();
    }
    if lower.starts_with("http://") {
        return format!("https://{}", &v[7..]);
    }
    if SCHEME_RE.is_match(v) {
        return v.to_string();
    }
    if v.starts_with("//") {
        return format!("https:{v}");
    }
    if v.starts_with('#') || v.starts_with('/') {
        return v.to_string();
    }
    format!("https://{}", v.trim_start_matches('/'))
}

/// Host portion of an absolute URL, or None when there is no `scheme://`.
fn split_host(url: &str) -> Option<(&str, &str, &str)> {
    let scheme_end = url.find("://")? + 3;
    let rest = &url[scheme_end..];
    let host_end = rest
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let host = &rest[..host_end];
    if host.is_empty() {
        return None;
    }
    Some((&url[..scheme_end], host, &rest[host_end..]))
}

/// Absolute URL with a `www.` subdomain inserted when the host is a bare
/// two-label domain.
pub fn to_website_href(s: &str) -> String {
    let href = to_absolute_url(s);
    match split_host(&href) {
        Some((scheme, host, tail)) => {
            let lower = host.to_lowercase();
            if !lower.starts_with("www.") && host.split('.').count() == 2 {
                format!("{scheme}www.{host}{tail}")
            } else {
                href
            }
        }
        None => {
            let v = strip_scheme(s.trim());
            if v.is_empty() {
                return String::new();
            }
            let v = if v.to_lowercase().starts_with("www.") { &v[4..] } else { v };
            format!("https://www.{v}")
        }
    }
}

/// Canonical GitHub profile URL for a full URL, a `github.com/...` path, or
/// a bare `@handle`.
pub fn to_github_href(s: &str) -> String {
    let v = s.trim();
    if v.is_empty() {
        return String::new();
    }
    if SCHEME_RE.is_match(v) {
        return to_absolute_url(v);
    }
    let no_scheme = strip_scheme(v);
    if GITHUB_HOST_RE.is_match(no_scheme) {
        return format!("https://{no_scheme}");
    }
    let handle = v.trim_start_matches('@');
    let handle = if handle.to_lowercase().starts_with("github.com/") {
        &handle[11..]
    } else {
        handle
    };
    format!("https://github.com/{handle}")
}

/// Canonical LinkedIn profile URL; the www. subdomain is forced for
/// linkedin.com hosts.
pub fn to_linkedin_href(s: &str) -> String {
    let v = s.trim();
    if v.is_empty() {
        return String::new();
    }
    if SCHEME_RE.is_match(v) {
        return to_absolute_url(v);
    }
    let no_scheme = strip_scheme(v);
    if LINKEDIN_HOST_RE.is_match(no_scheme) {
        let host_and_path = if no_scheme.to_lowercase().starts_with("linkedin.com") {
            format!("www.linkedin.com{}", &no_scheme[12..])
        } else {
            no_scheme.to_string()
        };
        return format!("https://{host_and_path}");
    }
    let handle = v.trim_start_matches('@');
    let handle = if handle.to_lowercase().starts_with("linkedin.com/in/") {
        &handle[16..]
    } else {
        handle
    };
    format!("https://www.linkedin.com/in/{handle}")
}

// ── Tests ──
