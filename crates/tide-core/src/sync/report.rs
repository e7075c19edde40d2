//! Report types for sync runs

use serde::Serialize;
use tide_fs::NormalizedPath;

use crate::target::TargetKind;
use crate::warning::SyncWarning;

/// Summary of one target's sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub target: TargetKind,
    pub schema: NormalizedPath,
    pub content_dir: NormalizedPath,
    /// Content files looked at
    pub files_scanned: usize,
    /// Content files excluded entirely
    pub files_skipped: usize,
    /// Records extracted before deduplication
    pub records: usize,
    /// Values in the rebuilt enum
    pub enum_size: usize,
    /// Schema content differs (or differed) from the rebuilt enum
    pub changed: bool,
    /// Schema file was rewritten
    pub written: bool,
    pub dry_run: bool,
    /// Checksum of the schema as rebuilt
    pub checksum: String,
    pub warnings: Vec<SyncWarning>,
}

impl SyncReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Duplicate-key warnings only.
    pub fn collisions(&self) -> impl Iterator<Item = &SyncWarning> {
        self.warnings.iter().filter(|w| w.is_collision())
    }
}
