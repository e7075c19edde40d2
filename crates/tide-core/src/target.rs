//! Enum targets
//!
//! Each target ties a content directory and extraction rule to the schema
//! node whose enum lists the identifiers found there.

use std::fmt;

use serde::Serialize;
use tide_fs::NormalizedPath;
use tide_schema::{EnumPatch, NodePath};

use crate::aggregate::Corpus;
use crate::record::IdentityRecord;
use crate::scanner::ExtractionRule;
use crate::Result;

/// Key holding the enum values inside the addressed node
pub const ENUM_KEY: &str = "enum";

/// Key holding the editor descriptions, parallel to [`ENUM_KEY`]
pub const DESCRIPTION_KEY: &str = "markdownEnumDescriptions";

/// The schema enums kept in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Threat vector UUIDs, referenced by detection objectives
    Threats,
    /// Detection signal UUIDs, referenced by detection rules
    DetectionModel,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Threats, TargetKind::DetectionModel];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threats => "threats",
            Self::DetectionModel => "detection-model",
        }
    }

    pub fn rule(&self) -> ExtractionRule {
        match self {
            Self::Threats => ExtractionRule::ThreatVector,
            Self::DetectionModel => ExtractionRule::DetectionSignals,
        }
    }

    /// Content directory name under the objects directory.
    pub fn content_dir_name(&self) -> &'static str {
        match self {
            Self::Threats => "Threat Vectors",
            Self::DetectionModel => "Detection Objectives",
        }
    }

    /// Address of the node that owns the enum.
    pub fn node_path(&self) -> &'static str {
        match self {
            Self::Threats => "properties.objective.properties.threats.items",
            Self::DetectionModel => "properties.detection_model",
        }
    }

    fn vocabulary(&self) -> &'static str {
        match self {
            Self::Threats => "Threat Vectors",
            Self::DetectionModel => "Detection Signals",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved target: where to read, what to extract, what to patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTarget {
    pub kind: TargetKind,
    pub content_dir: NormalizedPath,
    pub schema_path: NormalizedPath,
    pub node: NodePath,
}

impl EnumTarget {
    pub fn new(kind: TargetKind, content_dir: NormalizedPath, schema_path: NormalizedPath) -> Result<Self> {
        Ok(Self {
            kind,
            content_dir,
            schema_path,
            node: NodePath::parse(kind.node_path())?,
        })
    }

    pub fn rule(&self) -> ExtractionRule {
        self.kind.rule()
    }

    /// Markdown shown by editors next to `record`'s enum value.
    pub fn describe(&self, record: &IdentityRecord) -> String {
        let mut out = format!(
            "\n### {name}\n\n\u{1f511} **Identifier** : `{key}`\n\n_Vocabulary_ : `{vocabulary}`\n\n",
            name = record.name,
            key = record.key,
            vocabulary = self.kind.vocabulary(),
        );
        if let Some(parent) = &record.parent {
            out.push_str(&format!("_Detection Objective_ : `{parent}`\n\n"));
        }
        out.push_str(&format!("---\n\n{}\n", record.label));
        out
    }

    /// Enum patch listing every record of `corpus`, in corpus order.
    pub fn build_patch(&self, corpus: &Corpus) -> EnumPatch {
        EnumPatch::new(self.node.clone(), ENUM_KEY, DESCRIPTION_KEY).with_entries(
            corpus
                .records()
                .iter()
                .map(|record| (record.key.clone(), self.describe(record))),
        )
    }
}
