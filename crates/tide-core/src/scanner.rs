//! Corpus scanner
//!
//! Lists the YAML files of one content directory and extracts identity
//! records from each. Every file yields a [`FileScan`]; failures are carried
//! as warnings inside it, so one broken file never stops the scan.

use std::fs::{self, ReadDir};

use serde::Serialize;
use serde_yaml::Value;
use tide_fs::{DocumentStore, NormalizedPath};

use crate::record::{self, IdentityRecord};
use crate::warning::SyncWarning;

/// Extensions recognized as content files (compared case-insensitively)
const CONTENT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Which fields of a content file make up its identity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRule {
    /// `metadata.uuid` + `name`, one record per file
    ThreatVector,
    /// `objective.signals[].{uuid,name}`, labelled with the file's `name`
    DetectionSignals,
}

/// What a single content file contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Zero or more records were extracted
    Extracted(Vec<IdentityRecord>),
    /// The document is empty
    Empty,
    /// The whole file was excluded
    Skipped(SyncWarning),
}

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub path: NormalizedPath,
    pub outcome: ScanOutcome,
    /// Entries inside an otherwise usable file that had to be dropped
    pub dropped: Vec<SyncWarning>,
}

impl FileScan {
    fn skipped(path: &NormalizedPath, warning: SyncWarning) -> Self {
        Self {
            path: path.clone(),
            outcome: ScanOutcome::Skipped(warning),
            dropped: Vec::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Skipped(_))
    }

    /// Split into the extracted records and every warning raised for this file.
    pub fn into_parts(self) -> (Vec<IdentityRecord>, Vec<SyncWarning>) {
        let mut warnings = self.dropped;
        let records = match self.outcome {
            ScanOutcome::Extracted(records) => records,
            ScanOutcome::Empty => Vec::new(),
            ScanOutcome::Skipped(warning) => {
                warnings.insert(0, warning);
                Vec::new()
            }
        };
        (records, warnings)
    }
}

/// Scans content directories with a fixed extraction rule.
#[derive(Debug, Clone, Copy)]
pub struct CorpusScanner {
    store: DocumentStore,
    rule: ExtractionRule,
}

impl CorpusScanner {
    pub fn new(rule: ExtractionRule) -> Self {
        Self {
            store: DocumentStore::new(),
            rule,
        }
    }

    pub fn rule(&self) -> ExtractionRule {
        self.rule
    }

    /// Start a lazy scan of the files directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an [`SyncWarning::UnreadableDirectory`] when `dir` cannot be
    /// listed. Callers treat this as an empty corpus, not a failure.
    pub fn scan(&self, dir: &NormalizedPath) -> Result<CorpusScan, SyncWarning> {
        let entries = fs::read_dir(dir.to_native()).map_err(|e| SyncWarning::UnreadableDirectory {
            path: dir.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(dir = %dir, rule = ?self.rule, "Scanning content directory");
        Ok(CorpusScan {
            scanner: *self,
            dir: dir.clone(),
            entries,
        })
    }

    /// Parse one file and apply the extraction rule to it.
    pub fn scan_file(&self, path: &NormalizedPath) -> FileScan {
        let document: Value = match self.store.load(path) {
            Ok(document) => document,
            Err(e) => {
                return FileScan::skipped(
                    path,
                    SyncWarning::Unparsable {
                        path: path.clone(),
                        reason: failure_reason(&e),
                    },
                );
            }
        };

        if document.is_null() {
            tracing::debug!(file = %path, "Empty document");
            return FileScan {
                path: path.clone(),
                outcome: ScanOutcome::Empty,
                dropped: Vec::new(),
            };
        }

        match self.rule {
            ExtractionRule::ThreatVector => extract_threat_vector(path, &document),
            ExtractionRule::DetectionSignals => extract_signals(path, &document),
        }
    }
}

/// Iterator over the content files of one directory.
pub struct CorpusScan {
    scanner: CorpusScanner,
    dir: NormalizedPath,
    entries: ReadDir,
}

impl Iterator for CorpusScan {
    type Item = FileScan;

    fn next(&mut self) -> Option<FileScan> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(FileScan::skipped(
                        &self.dir,
                        SyncWarning::UnreadableDirectory {
                            path: self.dir.clone(),
                            reason: e.to_string(),
                        },
                    ));
                }
            };

            let path = NormalizedPath::new(entry.path());
            if is_content_file(&path) {
                return Some(self.scanner.scan_file(&path));
            }
        }
    }
}

fn is_content_file(path: &NormalizedPath) -> bool {
    path.is_file()
        && path.extension().is_some_and(|ext| {
            CONTENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn failure_reason(error: &tide_fs::Error) -> String {
    match error {
        tide_fs::Error::Parse { message, .. } => message.clone(),
        tide_fs::Error::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

/// Text of a scalar identity field. Empty strings count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field<'a>(document: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(document, |value, key| value.get(key))
}

fn extract_threat_vector(path: &NormalizedPath, document: &Value) -> FileScan {
    const UUID_FIELD: &str = "metadata.uuid";
    const NAME_FIELD: &str = "name";

    let Some(key) = field(document, UUID_FIELD).and_then(scalar_text) else {
        return FileScan::skipped(
            path,
            SyncWarning::MissingField {
                path: path.clone(),
                field: UUID_FIELD.into(),
            },
        );
    };
    if !record::is_valid_key(&key) {
        return FileScan::skipped(
            path,
            SyncWarning::MalformedKey {
                path: path.clone(),
                field: UUID_FIELD.into(),
                value: key,
            },
        );
    }
    let Some(name) = field(document, NAME_FIELD).and_then(scalar_text) else {
        return FileScan::skipped(
            path,
            SyncWarning::MissingField {
                path: path.clone(),
                field: NAME_FIELD.into(),
            },
        );
    };

    FileScan {
        path: path.clone(),
        outcome: ScanOutcome::Extracted(vec![IdentityRecord::threat_vector(
            key,
            name,
            path.clone(),
        )]),
        dropped: Vec::new(),
    }
}

fn extract_signals(path: &NormalizedPath, document: &Value) -> FileScan {
    let parent = field(document, "name")
        .and_then(scalar_text)
        .or_else(|| path.file_stem().map(str::to_string))
        .unwrap_or_default();

    let signals = match field(document, "objective.signals") {
        None | Some(Value::Null) => &[][..],
        Some(Value::Sequence(signals)) => signals.as_slice(),
        Some(_) => {
            return FileScan::skipped(
                path,
                SyncWarning::Unparsable {
                    path: path.clone(),
                    reason: "'objective.signals' is not a list".into(),
                },
            );
        }
    };

    if signals.is_empty() {
        tracing::debug!(file = %path, "Detection objective has no signals");
    }

    let mut records = Vec::with_capacity(signals.len());
    let mut dropped = Vec::new();

    for (idx, signal) in signals.iter().enumerate() {
        let uuid_field = format!("objective.signals[{idx}].uuid");
        let name_field = format!("objective.signals[{idx}].name");

        let key = signal.get("uuid").and_then(scalar_text);
        let name = signal.get("name").and_then(scalar_text);

        match (key, name) {
            (None, _) => dropped.push(SyncWarning::MissingField {
                path: path.clone(),
                field: uuid_field,
            }),
            (Some(_), None) => dropped.push(SyncWarning::MissingField {
                path: path.clone(),
                field: name_field,
            }),
            (Some(key), Some(_)) if !record::is_valid_key(&key) => {
                dropped.push(SyncWarning::MalformedKey {
                    path: path.clone(),
                    field: uuid_field,
                    value: key,
                })
            }
            (Some(key), Some(name)) => records.push(IdentityRecord::signal(
                key,
                name,
                parent.clone(),
                path.clone(),
            )),
        }
    }

    FileScan {
        path: path.clone(),
        outcome: ScanOutcome::Extracted(records),
        dropped,
    }
}
