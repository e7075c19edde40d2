//! Tide CLI
//!
//! Rebuilds the identifier enums of the knowledge-graph schemas from the YAML
//! content files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    match cli.command {
        Commands::Sync {
            target,
            repo,
            dry_run,
            json,
        } => commands::run_sync(&cwd, repo.repo_root.as_deref(), &target.kinds(), dry_run, json),
        Commands::Check { target, repo, json } => {
            commands::run_check(&cwd, repo.repo_root.as_deref(), &target.kinds(), json)
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Verbose mode enabled");
}
