//! JSON Schema document handling for the enum synchronizer
//!
//! Loads a schema document, addresses a node inside it with a dotted path,
//! swaps that node's enum and description arrays, and writes the document
//! back with every other key in its original order.

pub mod document;
pub mod error;
pub mod patch;
pub mod path;

pub use document::SchemaDocument;
pub use error::{Error, Result};
pub use patch::{EnumPatch, PatchOutcome, WriteMode, apply_patch};
pub use path::{NodePath, PathSegment};
