//! packsmith-core: Core library for asset pack manifest generation
//!
//! Scans a directory of downloadable asset packs, streams each file
//! through SHA-256, and produces a JSON manifest keyed by filename.
//! The consuming runtime loader reads the `version` field of each entry
//! as a cache-busting token, so changed pack content is fetched as a
//! new resource.

pub mod manifest;
pub mod scanner;

// Re-export commonly used types
pub use manifest::{Generator, Manifest, ManifestEntry, ManifestError, Report};
pub use scanner::{PackFile, Scanner};
