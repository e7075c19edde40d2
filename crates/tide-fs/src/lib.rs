//! Filesystem primitives for the schema enum synchronizer
//!
//! Provides normalized path handling, format-agnostic document loading and
//! crash-safe atomic writes.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::DocumentStore;
