//! Identity aggregation
//!
//! Turns the raw records of one scan into a [`Corpus`]: canonically ordered
//! and free of duplicate keys.

use std::collections::HashMap;

use tide_fs::NormalizedPath;

use crate::record::IdentityRecord;
use crate::warning::SyncWarning;

/// Ordered, duplicate-free identity records for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<IdentityRecord>,
}

impl Corpus {
    pub fn records(&self) -> &[IdentityRecord] {
        &self.records
    }

    /// Enum values, in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// `key → label` pairs, in the same order as [`Corpus::keys`].
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.key.as_str(), r.label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A corpus plus the collisions dropped while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub corpus: Corpus,
    pub collisions: Vec<SyncWarning>,
}

/// Order `records` canonically and keep the first record for every key.
///
/// Canonical order is the source path compared case-insensitively (exact
/// path breaks ties), then label, then key. Records that share a key with
/// an earlier record are dropped and reported as [`SyncWarning::DuplicateKey`].
pub fn aggregate(records: impl IntoIterator<Item = IdentityRecord>) -> Aggregation {
    let mut records: Vec<IdentityRecord> = records.into_iter().collect();
    records.sort_by_cached_key(|r| {
        (
            r.source_path.as_str().to_lowercase(),
            r.source_path.clone(),
            r.label.clone(),
            r.key.clone(),
        )
    });

    let mut first_seen: HashMap<String, NormalizedPath> = HashMap::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());
    let mut collisions = Vec::new();

    for record in records {
        if let Some(kept_path) = first_seen.get(&record.key) {
            tracing::warn!(
                key = %record.key,
                kept = %kept_path,
                dropped = %record.source_path,
                "Duplicate identity key"
            );
            collisions.push(SyncWarning::DuplicateKey {
                key: record.key.clone(),
                kept: kept_path.clone(),
                dropped: record.source_path.clone(),
            });
            continue;
        }
        first_seen.insert(record.key.clone(), record.source_path.clone());
        kept.push(record);
    }

    Aggregation {
        corpus: Corpus { records: kept },
        collisions,
    }
}
