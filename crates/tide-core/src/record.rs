//! Identity records extracted from content files

use serde::Serialize;
use tide_fs::NormalizedPath;
use uuid::Uuid;

/// One enum entry: the identifier plus what is needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRecord {
    /// Enum value (a hyphenated UUID)
    pub key: String,
    /// Human-readable label for the description map
    pub label: String,
    /// Name of the entity itself
    pub name: String,
    /// Name of the owning object, for records nested inside another object
    pub parent: Option<String>,
    /// File the record came from; ordering and diagnostics only
    pub source_path: NormalizedPath,
}

impl IdentityRecord {
    /// Record for a threat vector: labelled by its own name.
    pub fn threat_vector(key: String, name: String, source_path: NormalizedPath) -> Self {
        Self {
            key,
            label: name.clone(),
            name,
            parent: None,
            source_path,
        }
    }

    /// Record for a detection signal: labelled `"{name} ({parent})"`.
    pub fn signal(key: String, name: String, parent: String, source_path: NormalizedPath) -> Self {
        Self {
            key,
            label: format!("{name} ({parent})"),
            name,
            parent: Some(parent),
            source_path,
        }
    }
}

/// Whether `key` is a UUID in canonical 8-4-4-4-12 hyphenated form.
pub fn is_valid_key(key: &str) -> bool {
    key.len() == 36 && Uuid::parse_str(key).is_ok()
}
