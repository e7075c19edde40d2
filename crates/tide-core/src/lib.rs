//! Core synchronization layer for schema enums
//!
//! Keeps the identifier enums of the knowledge-graph JSON Schemas in step with
//! the YAML objects they reference:
//!
//! - **Corpus scanning**: read every content file of one object type and
//!   extract identity records, skipping bad files with a warning
//! - **Aggregation**: order records canonically and drop duplicate keys
//! - **Targets**: the two schema enums kept in sync (threat vectors referenced
//!   by detection objectives, detection signals referenced by detection rules)
//! - **SyncEngine**: scan → aggregate → patch for one target, with a report
//!
//! # Architecture
//!
//! ```text
//!            tide-cli
//!               |
//!           tide-core
//!               |
//!       +-------+--------+
//!       |                |
//!   tide-schema      tide-fs
//! ```
//!
//! Every run rebuilds the enum from scratch, so running it twice on the same
//! corpus leaves the schema byte-identical.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod record;
pub mod scanner;
pub mod sync;
pub mod target;
pub mod warning;

pub use aggregate::{Aggregation, Corpus, aggregate};
pub use config::{RepoLayout, SyncConfig};
pub use error::{Error, Result};
pub use record::IdentityRecord;
pub use scanner::{CorpusScanner, ExtractionRule, FileScan, ScanOutcome};
pub use sync::{SyncEngine, SyncOptions, SyncReport};
pub use target::{EnumTarget, TargetKind};
pub use warning::SyncWarning;
