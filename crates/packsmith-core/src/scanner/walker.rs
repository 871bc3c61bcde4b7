//! File walker: Discovers pack files in a directory

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

/// Read buffer size for streaming hashes. Bounds memory use per file.
const HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// A pack file discovered during scanning
#[derive(Debug, Clone)]
pub struct PackFile {
    pub name: String,
    pub path: PathBuf,
}

impl PackFile {
    /// Compute the SHA-256 digest of the file contents as lowercase hex.
    ///
    /// The file is read in fixed-size chunks, so memory use is
    /// independent of file size. The handle is dropped before any read
    /// error propagates.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn compute_hash(&self) -> io::Result<String> {
        let mut file = File::open(&self.path)?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; HASH_CHUNK_SIZE];
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Scanner for discovering pack files in a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    suffix: String,
}

impl Scanner {
    /// Create a new scanner for the given pack directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: ".pck".to_string(),
        }
    }

    /// Filter to filenames ending with the given suffix.
    ///
    /// The match is a literal, case-sensitive tail comparison, not a
    /// glob: `"pck"` also matches a file named `notapck`.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Scan the directory and return matching files, sorted by name.
    ///
    /// Only the top level of the directory is listed. An entry is
    /// included when its name ends with the suffix and it stats as a
    /// regular file; the stat follows symlinks, so a link to a regular
    /// file counts. Directories, devices, and entries that cannot be
    /// statted are skipped silently.
    ///
    /// # Errors
    /// Returns an error if the directory listing itself fails.
    pub fn scan(&self) -> io::Result<Vec<PackFile>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            let name = match entry.file_name().to_str() {
                Some(name) => name,
                None => continue,
            };
            if !name.ends_with(&self.suffix) {
                continue;
            }
            if fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file()) {
                files.push(PackFile {
                    name: name.to_string(),
                    path: entry.path().to_path_buf(),
                });
            }
        }
        Ok(files)
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
