//! Enum replacement as a single load → replace → persist step

use serde::Serialize;
use tide_fs::{NormalizedPath, checksum};

use crate::{NodePath, Result, SchemaDocument};

/// Whether [`apply_patch`] may touch the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Persist the patched document when it differs from disk
    #[default]
    Write,
    /// Compute the outcome only
    DryRun,
}

/// New contents for one enum node: ordered values, each with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumPatch {
    node: NodePath,
    enum_key: String,
    description_key: String,
    entries: Vec<(String, String)>,
}

impl EnumPatch {
    pub fn new(
        node: NodePath,
        enum_key: impl Into<String>,
        description_key: impl Into<String>,
    ) -> Self {
        Self {
            node,
            enum_key: enum_key.into(),
            description_key: description_key.into(),
            entries: Vec::new(),
        }
    }

    /// Append one enum value with its description.
    pub fn push(&mut self, value: impl Into<String>, description: impl Into<String>) {
        self.entries.push((value.into(), description.into()));
    }

    pub fn with_entries<I, V, D>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (V, D)>,
        V: Into<String>,
        D: Into<String>,
    {
        for (value, description) in entries {
            self.push(value, description);
        }
        self
    }

    pub fn node(&self) -> &NodePath {
        &self.node
    }

    pub fn enum_key(&self) -> &str {
        &self.enum_key
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(v, _)| v.as_str())
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, d)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of applying an [`EnumPatch`] to a schema file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    /// Rendered document differs from the file on disk
    pub changed: bool,
    /// The file was rewritten
    pub written: bool,
    /// Number of values now in the enum
    pub enum_size: usize,
    pub checksum_before: String,
    pub checksum_after: String,
}

/// Load the schema at `path`, replace the enum node described by `patch`
/// and persist it atomically.
///
/// Nothing is written when the rendered document is byte-identical to the
/// file on disk, or when `mode` is [`WriteMode::DryRun`]. Any error leaves
/// the file untouched.
pub fn apply_patch(path: &NormalizedPath, patch: &EnumPatch, mode: WriteMode) -> Result<PatchOutcome> {
    let mut document = SchemaDocument::load(path)?;
    document.replace_enum(patch)?;

    let rendered = document.render()?;
    let checksum_after = checksum::compute_checksum(&rendered);
    let changed = checksum_after != document.checksum();
    let written = changed && mode == WriteMode::Write;

    if written {
        document.save(&rendered)?;
        tracing::info!(schema = %path, entries = patch.len(), "Schema updated");
    } else if changed {
        tracing::info!(schema = %path, "Schema would change (dry run)");
    } else {
        tracing::debug!(schema = %path, "Schema already up to date");
    }

    Ok(PatchOutcome {
        changed,
        written,
        enum_size: patch.len(),
        checksum_before: document.checksum().to_string(),
        checksum_after,
    })
}
