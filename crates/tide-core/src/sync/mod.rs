//! SyncEngine for rebuilding schema enums from the content corpus
//!
//! - **sync**: scan, aggregate and patch the schema for one or more targets
//! - **check**: the same computation without writing, to detect stale enums

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::SyncReport;
