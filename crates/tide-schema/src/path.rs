//! Node addressing inside schema documents
//!
//! Nodes are addressed with dot-separated keys and bracketed array indices:
//!
//! - Dot-separated keys: `properties.detection_model`
//! - Array indexing: `allOf[0].then`
//! - Combined: `properties.objective.properties.threats.items`
//!
//! # Examples
//!
//! ```
//! use tide_schema::path::{NodePath, PathSegment, resolve};
//! use serde_json::json;
//!
//! let node = NodePath::parse("allOf[1].then").unwrap();
//! assert_eq!(node.segments(), &[
//!     PathSegment::Key("allOf".to_string()),
//!     PathSegment::Index(1),
//!     PathSegment::Key("then".to_string()),
//! ]);
//!
//! let value = json!({"allOf": [{}, {"then": {"type": "object"}}]});
//! assert_eq!(
//!     resolve(&value, node.segments()),
//!     Ok(&json!({"type": "object"}))
//! );
//! ```

use std::fmt;

use serde_json::Value;

use crate::{Error, Result};

/// A segment of a node path - either a key or an array index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A key in an object (e.g., "properties" in "properties.detection_model")
    Key(String),
    /// An index in an array (e.g., 0 in `allOf[0]`)
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// A parsed node address, keeping the text it was parsed from for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Parse a dotted node path. An empty string addresses the document root.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self {
            raw: raw.to_string(),
            segments: parse_path(raw)?,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

/// Parse a path string into segments.
///
/// Empty keys (`a..b`) are skipped. A bracket that is never closed or that
/// does not hold a non-negative integer is rejected.
pub fn parse_path(path: &str) -> Result<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut current_key = String::new();
    let mut chars = path.chars();

    let invalid = |reason: &str| Error::InvalidNodePath {
        node: path.to_string(),
        reason: reason.to_string(),
    };

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current_key.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut current_key)));
                }
            }
            '[' => {
                if !current_key.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut current_key)));
                }
                let mut index_str = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == ']' {
                        closed = true;
                        break;
                    }
                    index_str.push(ch);
                }
                if !closed {
                    return Err(invalid("unclosed '['"));
                }
                let index = index_str
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid(&format!("'{index_str}' is not an array index")))?;
                segments.push(PathSegment::Index(index));
            }
            _ => current_key.push(ch),
        }
    }

    if !current_key.is_empty() {
        segments.push(PathSegment::Key(current_key));
    }

    Ok(segments)
}

/// Walk `segments` from `value`.
///
/// On failure returns the index of the first segment that could not be
/// followed, so callers can report exactly where the document diverged.
pub fn resolve<'a>(
    value: &'a Value,
    segments: &[PathSegment],
) -> std::result::Result<&'a Value, usize> {
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        let next = match segment {
            PathSegment::Key(key) => current.get(key.as_str()),
            PathSegment::Index(idx) => current.get(*idx),
        };
        current = next.ok_or(i)?;
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(
    value: &'a mut Value,
    segments: &[PathSegment],
) -> std::result::Result<&'a mut Value, usize> {
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        let next = match segment {
            PathSegment::Key(key) => current.get_mut(key.as_str()),
            PathSegment::Index(idx) => current.get_mut(*idx),
        };
        current = match next {
            Some(v) => v,
            None => return Err(i),
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path_dotted() {
        let path = parse_path("properties.objective.properties.threats.items").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[4], PathSegment::Key("items".to_string()));
    }

    #[test]
    fn test_parse_path_mixed() {
        let path = parse_path("oneOf[2].then.properties").unwrap();
        assert_eq!(
            path,
            vec![
                PathSegment::Key("oneOf".to_string()),
                PathSegment::Index(2),
                PathSegment::Key("then".to_string()),
                PathSegment::Key("properties".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_path_keeps_spaces_in_keys() {
        let path = parse_path("properties.detection model").unwrap();
        assert_eq!(path[1], PathSegment::Key("detection model".to_string()));
    }

    #[test]
    fn test_parse_path_rejects_bad_index() {
        assert!(parse_path("allOf[x]").is_err());
        assert!(parse_path("allOf[-1]").is_err());
        assert!(parse_path("allOf[0").is_err());
    }

    #[test]
    fn test_empty_path_is_root() {
        let node = NodePath::parse("").unwrap();
        assert!(node.segments().is_empty());
        assert_eq!(node.to_string(), "<root>");
    }

    #[test]
    fn test_resolve_reports_first_missing_segment() {
        let value = json!({"properties": {"objective": {"type": "object"}}});
        let path = parse_path("properties.objective.properties.threats").unwrap();
        assert_eq!(resolve(&value, &path), Err(2));
    }

    #[test]
    fn test_resolve_index_out_of_bounds() {
        let value = json!({"allOf": [{}]});
        let path = parse_path("allOf[1]").unwrap();
        assert_eq!(resolve(&value, &path), Err(1));
    }

    #[test]
    fn test_resolve_mut_allows_edit() {
        let mut value = json!({"properties": {"detection_model": {"enum": ["old"]}}});
        let path = parse_path("properties.detection_model").unwrap();

        let node = resolve_mut(&mut value, &path).unwrap();
        node["enum"] = json!(["new"]);

        assert_eq!(
            resolve(&value, &parse_path("properties.detection_model.enum").unwrap()),
            Ok(&json!(["new"]))
        );
    }
}
