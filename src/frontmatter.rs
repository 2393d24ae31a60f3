//! YAML front-matter override loader.
//!
//! A document may open with a `---` fenced YAML block supplying explicit
//! field values that take precedence over anything parsed from the body.
//! An unterminated fence is not front matter; the whole input stays body.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter is not a mapping")]
    NotAMapping,
}

#[derive(Debug, Clone, Default)]
pub struct FrontmatterResult {
    /// Override map, present only when a front-matter block was found.
    pub overrides: Option<Map<String, Value>>,
    /// Input with the front-matter block removed.
    pub body: String,
}

/// Split a leading `---` YAML block from the document body and parse it
/// into a JSON override map.
pub fn extract_frontmatter(input: &str) -> Result<FrontmatterResult, FrontmatterError> {
    let Some(rest) = input.strip_prefix("---") else {
        return Ok(FrontmatterResult { overrides: None, body: input.to_string() });
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return Ok(FrontmatterResult { overrides: None, body: input.to_string() });
    };

    let Some(end) = find_closing_fence(rest) else {
        return Ok(FrontmatterResult { overrides: None, body: input.to_string() });
    };
    let (yaml, body) = rest.split_at(end.fence_start);

    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    let overrides = match serde_json::to_value(parsed) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok(FrontmatterResult {
        overrides: Some(overrides),
        body: body[end.fence_len..].to_string(),
    })
}

struct Fence {
    fence_start: usize,
    fence_len: usize,
}

fn find_closing_fence(rest: &str) -> Option<Fence> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(Fence { fence_start: offset, fence_len: line.len() });
        }
        offset += line.len();
    }
    None
}

// ── Tests ──
