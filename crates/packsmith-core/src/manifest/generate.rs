//! Manifest generation: scan, hash, serialize, write

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::entry::{Manifest, ManifestEntry, format_mtime};
use crate::scanner::{PackFile, Scanner};

/// Output filename used when no explicit path is given.
pub const DEFAULT_MANIFEST_NAME: &str = "packs_manifest.json";

/// Errors that can occur while generating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Summary of a completed manifest run
#[derive(Debug, Clone)]
pub struct Report {
    pub out_path: PathBuf,
    pub entry_count: usize,
}

/// Configuration for a manifest run
#[derive(Debug, Clone)]
pub struct Generator {
    dir: PathBuf,
    suffix: String,
    out: Option<PathBuf>,
    pretty: bool,
}

impl Generator {
    /// Create a generator for the given pack directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            suffix: ".pck".to_string(),
            out: None,
            pretty: false,
        }
    }

    /// Set the filename-suffix filter
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set an explicit output path instead of `<dir>/packs_manifest.json`
    #[must_use]
    pub fn with_output(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = Some(out.into());
        self
    }

    /// Pretty-print the manifest with sorted keys and a 2-space indent
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Scan the pack directory and write the manifest.
    ///
    /// The manifest is rebuilt from scratch on every run; the output
    /// file is replaced, never merged. Files are processed one at a
    /// time in sorted-name order.
    ///
    /// # Errors
    /// Returns [`ManifestError::NotADirectory`] when the source path
    /// does not resolve to a directory, and a read or write error if
    /// any pack file cannot be hashed or the output cannot be written.
    /// Nothing is written unless every entry was built.
    pub fn run(&self) -> Result<Report, ManifestError> {
        let root = resolve_dir(&self.dir)?;
        let out_path = self
            .out
            .clone()
            .unwrap_or_else(|| root.join(DEFAULT_MANIFEST_NAME));

        info!("Scanning {} for *{} files", root.display(), self.suffix);

        let manifest = build_manifest(&root, &self.suffix)?;
        let json = render(&manifest, self.pretty)?;

        fs::write(&out_path, json).map_err(|source| ManifestError::Write {
            path: out_path.clone(),
            source,
        })?;

        info!("Wrote {} entries to {}", manifest.len(), out_path.display());

        Ok(Report {
            out_path,
            entry_count: manifest.len(),
        })
    }
}

/// Resolve the source directory to an absolute path, requiring that it
/// exists and is a directory.
fn resolve_dir(dir: &Path) -> Result<PathBuf, ManifestError> {
    let abs = std::path::absolute(dir).map_err(|source| ManifestError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    if abs.is_dir() {
        Ok(abs)
    } else {
        Err(ManifestError::NotADirectory(abs))
    }
}

/// Build entries for every matching file, in sorted-name order.
///
/// # Errors
/// Any failure to list the directory or read a candidate file aborts
/// the build; there is no per-file skip-and-continue.
pub fn build_manifest(root: &Path, suffix: &str) -> Result<Manifest, ManifestError> {
    let files = Scanner::new(root)
        .with_suffix(suffix)
        .scan()
        .map_err(|source| ManifestError::Read {
            path: root.to_path_buf(),
            source,
        })?;

    let mut manifest = Manifest::new();
    for file in files {
        debug!("Hashing {}", file.path.display());
        let entry = entry_for(&file)?;
        manifest.insert(file.name, entry);
    }
    Ok(manifest)
}

/// Stat and hash one pack file
fn entry_for(file: &PackFile) -> Result<ManifestEntry, ManifestError> {
    let meta = fs::metadata(&file.path).map_err(|source| ManifestError::Read {
        path: file.path.clone(),
        source,
    })?;
    let modified = meta.modified().map_err(|source| ManifestError::Read {
        path: file.path.clone(),
        source,
    })?;
    let digest = file.compute_hash().map_err(|source| ManifestError::Read {
        path: file.path.clone(),
        source,
    })?;

    Ok(ManifestEntry {
        version: digest.clone(),
        size: meta.len(),
        mtime: format_mtime(modified),
        sha256: digest,
    })
}

/// Serialize the manifest to JSON with a single trailing newline.
///
/// Pretty mode uses a 2-space indent; keys are sorted either way
/// because the manifest is a [`Manifest`] (`BTreeMap`).
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(manifest: &Manifest, pretty: bool) -> Result<String, ManifestError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(manifest)?
    } else {
        serde_json::to_string(manifest)?
    };
    json.push('\n');
    Ok(json)
}
