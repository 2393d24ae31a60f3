//! Override merge and post-merge link normalization.

use serde_json::{Map, Value};

use crate::links;
use crate::model::ResumeDocument;

/// Shallow field-level overlay: every override key replaces the parsed
/// top-level field wholesale (list values included, no deep merge). Keys
/// that do not name a model field are ignored. Total: an override that
/// cannot be applied leaves the parsed model unchanged.
pub fn merge_override(parsed: ResumeDocument, overrides: Option<&Map<String, Value>>) -> ResumeDocument {
    let Some(overrides) = overrides else { return parsed };
    if overrides.is_empty() {
        return parsed;
    }

    let Ok(Value::Object(mut base)) = serde_json::to_value(&parsed) else {
        return parsed;
    };
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
    match serde_json::from_value(Value::Object(base)) {
        Ok(merged) => merged,
        Err(err) => {
            tracing::warn!("override rejected, keeping parsed fields: {err}");
            parsed
        }
    }
}

/// Materialize derived hrefs from the merged display values: personal links
/// and per-project links. Display text is never altered.
pub fn finalize_links(doc: &mut ResumeDocument) {
    doc.website_href = if doc.website.is_empty() {
        String::new()
    } else {
        links::to_website_href(&doc.website)
    };
    doc.github_href = if doc.github.is_empty() {
        String::new()
    } else {
        links::to_github_href(&doc.github)
    };
    doc.linkedin_href = if doc.linkedin.is_empty() {
        String::new()
    } else {
        links::to_linkedin_href(&doc.linkedin)
    };
    for project in &mut doc.projects {
        project.link_href = if project.link.is_empty() {
            String::new()
        } else {
            links::to_absolute_url(&project.link)
        };
    }
}

// ── Tests ──
