//! `tide.toml` parsing

use serde::{Deserialize, Serialize};
use tide_fs::{DocumentStore, NormalizedPath};

use crate::Result;

/// Name of the optional configuration file at the repository root
pub const CONFIG_FILE: &str = "tide.toml";

fn default_objects_dir() -> String {
    "Objects".to_string()
}

fn default_schemas_dir() -> String {
    "Schemas".to_string()
}

/// Schema file names, relative to the schemas directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaFiles {
    /// Schema holding the threat vector enum
    pub threats: String,
    /// Schema holding the detection signal enum
    pub detection_model: String,
}

impl Default for SchemaFiles {
    fn default() -> Self {
        Self {
            threats: "Detection Objective.schema.json".to_string(),
            detection_model: "MDR Schema.json".to_string(),
        }
    }
}

/// Settings read from `tide.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default = "default_objects_dir")]
    pub objects_dir: String,

    #[serde(default = "default_schemas_dir")]
    pub schemas_dir: String,

    #[serde(default)]
    pub schemas: SchemaFiles,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            objects_dir: default_objects_dir(),
            schemas_dir: default_schemas_dir(),
            schemas: SchemaFiles::default(),
        }
    }
}

impl SyncConfig {
    /// Load `tide.toml` from `root`, or the defaults when there is none.
    ///
    /// # Errors
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(config = %path, "Loading sync configuration");
        Ok(DocumentStore::new().load(&path)?)
    }
}
