//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tide_core::TargetKind;

/// Tide - keep schema enums in step with the content corpus
#[derive(Parser, Debug)]
#[command(name = "tide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rebuild schema enums from the content files
    ///
    /// Examples:
    ///   tide sync threats              # Threat vectors -> detection objective schema
    ///   tide sync detection-model      # Signals -> detection rule schema
    ///   tide sync all --dry-run        # Report what would change
    Sync {
        /// Enum to rebuild
        target: TargetArg,

        #[command(flatten)]
        repo: RepoArgs,

        /// Compute the result without writing any schema
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Exit non-zero if a schema enum is out of date
    Check {
        /// Enum to check
        target: TargetArg,

        #[command(flatten)]
        repo: RepoArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Repository selection shared by all commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RepoArgs {
    /// Repository root (default: discovered from the current directory)
    #[arg(long, env = "TIDE_REPO_ROOT")]
    pub repo_root: Option<PathBuf>,
}

/// Sync target selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    /// Threat vector UUIDs in the detection objective schema
    Threats,
    /// Detection signal UUIDs in the detection rule schema
    DetectionModel,
    /// Both, threats first
    All,
}

impl TargetArg {
    pub fn kinds(self) -> Vec<TargetKind> {
        match self {
            Self::Threats => vec![TargetKind::Threats],
            Self::DetectionModel => vec![TargetKind::DetectionModel],
            Self::All => TargetKind::ALL.to_vec(),
        }
    }
}
