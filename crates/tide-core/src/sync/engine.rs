//! SyncEngine implementation

use tide_schema::{WriteMode, apply_patch};

use crate::Result;
use crate::aggregate::aggregate;
use crate::config::RepoLayout;
use crate::scanner::CorpusScanner;
use crate::target::{EnumTarget, TargetKind};

use super::report::SyncReport;

/// Options for sync operations
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compute the outcome without writing any schema
    pub dry_run: bool,
}

/// Rebuilds schema enums from the content files of a repository.
///
/// Each call rebuilds the target enum from a full scan; nothing is carried
/// over between runs. Runs against the same repository must not overlap.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    layout: RepoLayout,
}

impl SyncEngine {
    pub fn new(layout: RepoLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    /// Synchronize one target.
    ///
    /// # Errors
    ///
    /// Fails only for problems with the schema itself (missing, malformed,
    /// node absent, write failure). Bad content files end up as warnings in
    /// the report.
    pub fn sync(&self, kind: TargetKind, options: SyncOptions) -> Result<SyncReport> {
        let target = self.layout.target(kind)?;
        self.run(&target, options)
    }

    /// Synchronize several targets in order, stopping at the first fatal error.
    pub fn sync_all(&self, kinds: &[TargetKind], options: SyncOptions) -> Result<Vec<SyncReport>> {
        kinds.iter().map(|kind| self.sync(*kind, options)).collect()
    }

    /// Report whether a target's schema is stale, without writing it.
    pub fn check(&self, kind: TargetKind) -> Result<SyncReport> {
        self.sync(kind, SyncOptions { dry_run: true })
    }

    fn run(&self, target: &EnumTarget, options: SyncOptions) -> Result<SyncReport> {
        tracing::info!(
            target = %target.kind,
            content = %target.content_dir,
            schema = %target.schema_path,
            "Synchronizing schema enum"
        );

        let scanner = CorpusScanner::new(target.rule());
        let mut warnings = Vec::new();
        let mut records = Vec::new();
        let mut files_scanned = 0;
        let mut files_skipped = 0;

        match scanner.scan(&target.content_dir) {
            Ok(scan) => {
                for file in scan {
                    files_scanned += 1;
                    if file.is_skipped() {
                        files_skipped += 1;
                    }
                    let (file_records, file_warnings) = file.into_parts();
                    records.extend(file_records);
                    warnings.extend(file_warnings);
                }
            }
            Err(warning) => warnings.push(warning),
        }

        // Directory listing order is platform dependent
        warnings.sort_by(|a, b| a.path().cmp(b.path()));
        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        let records_found = records.len();
        let aggregation = aggregate(records);
        warnings.extend(aggregation.collisions);

        let patch = target.build_patch(&aggregation.corpus);
        let mode = if options.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        };
        let outcome = apply_patch(&target.schema_path, &patch, mode)?;

        tracing::info!(
            target = %target.kind,
            files = files_scanned,
            skipped = files_skipped,
            enum_size = outcome.enum_size,
            changed = outcome.changed,
            "Synchronization finished"
        );

        Ok(SyncReport {
            target: target.kind,
            schema: target.schema_path.clone(),
            content_dir: target.content_dir.clone(),
            files_scanned,
            files_skipped,
            records: records_found,
            enum_size: outcome.enum_size,
            changed: outcome.changed,
            written: outcome.written,
            dry_run: options.dry_run,
            checksum: outcome.checksum_after,
            warnings,
        })
    }
}

