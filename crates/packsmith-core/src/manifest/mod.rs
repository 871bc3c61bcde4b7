//! Manifest module: Pack manifest model and generation
//!
//! Builds the JSON manifest consumed by the runtime pack loader. Each
//! entry records the content hash (doubling as the cache-busting
//! `version` token), byte size, and modification time of one pack file.

mod entry;
mod generate;

pub use entry::{Manifest, ManifestEntry};
pub use generate::{DEFAULT_MANIFEST_NAME, Generator, ManifestError, Report, build_manifest, render};

#[cfg(test)]
mod tests;
