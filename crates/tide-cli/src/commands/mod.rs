//! Command implementations for tide-cli

pub mod sync;

pub use sync::{run_check, run_sync};
