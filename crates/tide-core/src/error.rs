//! Error types for tide-core
//!
//! Only run-aborting failures live here. Problems with individual content
//! files are [`SyncWarning`](crate::SyncWarning)s and never surface as errors.

use std::path::PathBuf;

/// Result type for tide-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a synchronization run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No ancestor of the start directory looks like a content repository
    #[error(
        "Repository root not found from {start}: no ancestor contains both '{schemas_dir}' and '{objects_dir}'"
    )]
    RootNotFound {
        start: PathBuf,
        schemas_dir: String,
        objects_dir: String,
    },

    /// Explicit repository root is not a directory
    #[error("Repository root {path} is not a directory")]
    InvalidRoot { path: PathBuf },

    /// Schema load, addressing or write failure
    #[error(transparent)]
    Schema(#[from] tide_schema::Error),

    /// Filesystem or configuration parse error
    #[error(transparent)]
    Fs(#[from] tide_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
