//! Repository configuration and layout
//!
//! A content repository keeps its YAML objects under one directory and its
//! JSON Schemas under another:
//!
//! ```text
//! <root>/
//!   tide.toml                      (optional)
//!   Objects/
//!     Threat Vectors/*.yaml
//!     Detection Objectives/*.yaml
//!   Schemas/
//!     Detection Objective.schema.json
//!     MDR Schema.json
//! ```
//!
//! Directory and schema file names can be overridden in `tide.toml`; every
//! key is optional.

mod layout;
mod settings;

pub use layout::{MAX_DISCOVERY_DEPTH, RepoLayout};
pub use settings::{CONFIG_FILE, SchemaFiles, SyncConfig};
