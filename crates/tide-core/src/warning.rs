//! Recoverable problems found while building a corpus
//!
//! A warning always means something was left out of the enum: a file, one
//! signal, or a duplicate key. The run itself still succeeds.

use serde::Serialize;
use tide_fs::NormalizedPath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncWarning {
    /// File could not be read or is not valid YAML; skipped
    #[error("{path}: could not parse file: {reason}")]
    Unparsable { path: NormalizedPath, reason: String },

    /// A required identity field is absent; the file or signal is skipped
    #[error("{path}: missing field '{field}'")]
    MissingField { path: NormalizedPath, field: String },

    /// An identity field is present but not a UUID; the file or signal is skipped
    #[error("{path}: field '{field}' is not a valid UUID: '{value}'")]
    MalformedKey {
        path: NormalizedPath,
        field: String,
        value: String,
    },

    /// Two records share a key; the first in canonical order is kept
    #[error("duplicate key {key}: kept {kept}, dropped {dropped}")]
    DuplicateKey {
        key: String,
        kept: NormalizedPath,
        dropped: NormalizedPath,
    },

    /// The content directory could not be listed; nothing was scanned
    #[error("{path}: content directory unreadable: {reason}")]
    UnreadableDirectory { path: NormalizedPath, reason: String },
}

impl SyncWarning {
    /// The file (or directory) the warning is about.
    pub fn path(&self) -> &NormalizedPath {
        match self {
            Self::Unparsable { path, .. }
            | Self::MissingField { path, .. }
            | Self::MalformedKey { path, .. }
            | Self::UnreadableDirectory { path, .. } => path,
            Self::DuplicateKey { dropped, .. } => dropped,
        }
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_serialize_with_kind_tag() {
        let warning = SyncWarning::MissingField {
            path: NormalizedPath::new("Objects/Threat Vectors/TVM - Alpha.yaml"),
            field: "metadata.uuid".into(),
        };

        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "missing_field");
        assert_eq!(json["path"], "Objects/Threat Vectors/TVM - Alpha.yaml");
        assert_eq!(json["field"], "metadata.uuid");
    }

    #[test]
    fn duplicate_key_points_at_dropped_file() {
        let warning = SyncWarning::DuplicateKey {
            key: "11111111-1111-4111-8111-111111111111".into(),
            kept: NormalizedPath::new("a.yaml"),
            dropped: NormalizedPath::new("b.yaml"),
        };
        assert_eq!(warning.path().as_str(), "b.yaml");
        assert!(warning.is_collision());
        assert_eq!(
            warning.to_string(),
            "duplicate key 11111111-1111-4111-8111-111111111111: kept a.yaml, dropped b.yaml"
        );
    }
}
