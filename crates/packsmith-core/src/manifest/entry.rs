//! Manifest entry types and timestamp formatting

use std::collections::BTreeMap;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The manifest: a mapping from pack filename to its metadata entry.
///
/// Keys iterate in lexicographic order, so serialization is stable
/// across runs of an unchanged directory.
pub type Manifest = BTreeMap<String, ManifestEntry>;

/// Metadata for a single pack file.
///
/// `version` and `sha256` carry the same digest: the loader appends
/// `version` to pack URLs as a cache-busting query parameter, while
/// `sha256` is kept under its own name for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub version: String,
    pub size: u64,
    pub mtime: String,
    pub sha256: String,
}

/// Format a modification time as UTC ISO 8601 with second precision.
///
/// Fractional seconds are truncated, not rounded, and the UTC offset is
/// rendered as the literal suffix `Z`.
pub(crate) fn format_mtime(mtime: SystemTime) -> String {
    let utc: DateTime<Utc> = mtime.into();
    utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
