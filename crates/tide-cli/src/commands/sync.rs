//! Sync and check command implementations

use std::path::Path;

use colored::Colorize;

use tide_core::{RepoLayout, SyncEngine, SyncOptions, SyncReport, SyncWarning, TargetKind};

use crate::error::{CliError, Result};

/// Run the sync command
///
/// Rebuilds every requested enum. Warnings never fail the run.
pub fn run_sync(
    cwd: &Path,
    repo_root: Option<&Path>,
    kinds: &[TargetKind],
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let engine = open_engine(cwd, repo_root)?;

    if !json {
        let verb = if dry_run { "Checking" } else { "Synchronizing" };
        println!(
            "{} {} schema enums in {}",
            "=>".blue().bold(),
            verb,
            engine.layout().root()
        );
    }

    let reports = engine.sync_all(kinds, SyncOptions { dry_run })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

/// Run the check command
///
/// Fails when any requested enum differs from what a sync would write.
pub fn run_check(cwd: &Path, repo_root: Option<&Path>, kinds: &[TargetKind], json: bool) -> Result<()> {
    let engine = open_engine(cwd, repo_root)?;

    let reports = kinds
        .iter()
        .map(|kind| engine.check(*kind))
        .collect::<tide_core::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let stale: Vec<&str> = reports
        .iter()
        .filter(|r| r.changed)
        .map(|r| r.target.as_str())
        .collect();

    if stale.is_empty() {
        return Ok(());
    }
    Err(CliError::user(format!(
        "stale schema enum ({}); run `tide sync` to update",
        stale.join(", ")
    )))
}

fn open_engine(cwd: &Path, repo_root: Option<&Path>) -> Result<SyncEngine> {
    let layout = RepoLayout::resolve(repo_root, cwd)?;
    tracing::debug!(root = %layout.root(), "Resolved repository root");
    Ok(SyncEngine::new(layout))
}

fn print_report(report: &SyncReport) {
    let status = match (report.changed, report.written) {
        (false, _) => "OK".green().bold(),
        (true, true) => "UPDATED".green().bold(),
        (true, false) => "STALE".yellow().bold(),
    };
    println!(
        "{} {} ({})",
        status,
        report.target.as_str().cyan(),
        report.schema
    );

    if report.has_warnings() {
        println!("   {} warning(s):", report.warnings.len());
    }
    for warning in &report.warnings {
        let marker = match warning {
            SyncWarning::DuplicateKey { .. } => "!".red(),
            _ => "-".yellow(),
        };
        println!("   {} {}", marker, warning);
    }

    println!(
        "   {} files scanned, {} skipped, {} records, {} enum values",
        report.files_scanned, report.files_skipped, report.records, report.enum_size
    );
}
