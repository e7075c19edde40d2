//! Error types for tide-schema
//!
//! Every variant here is fatal for a sync run: the schema file on disk is
//! left exactly as it was.

use std::path::PathBuf;

/// Result type for tide-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, patching or writing a schema
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Schema file missing, unreadable or not well-formed JSON
    #[error("Failed to load schema {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: tide_fs::Error,
    },

    /// A segment of the node path does not exist in the document
    #[error("Node '{node}' not found in schema {path}: missing segment '{segment}'")]
    NodeNotFound {
        path: PathBuf,
        node: String,
        segment: String,
    },

    /// The addressed node exists but cannot hold enum keys
    #[error("Node '{node}' in schema {path} is not an object")]
    NotAnObject { path: PathBuf, node: String },

    /// Node path text could not be parsed
    #[error("Invalid node path '{node}': {reason}")]
    InvalidNodePath { node: String, reason: String },

    /// Serializing the patched document failed
    #[error("Failed to serialize schema {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing or renaming the patched document failed
    #[error("Failed to write schema {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: tide_fs::Error,
    },
}
