//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Recursive directory walking with exclude/extension filters
//! - Streaming content hashing (SHA-256 or BLAKE3)
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: Content fingerprint computation (streaming)

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{Fingerprint, HashAlgorithm, HashError, Hasher, DEFAULT_CHUNK_SIZE};
pub use walker::Walker;

/// Configuration for directory walking.
///
/// Both scan strategies share one configuration, so exclude and extension
/// filters apply uniformly to serial and parallel scans.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories to prune from traversal, by name or trailing path.
    pub exclude: Vec<PathBuf>,

    /// File extensions to include (lowercase, no leading dot).
    /// Empty means all files are included.
    pub extensions: Vec<String>,
}

impl WalkerConfig {
    /// Create a configuration from CLI arguments.
    ///
    /// Extensions are normalized: leading dots stripped, lowercased, so
    /// `.TXT`, `txt` and `.txt` all mean the same filter.
    #[must_use]
    pub fn new(exclude: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            exclude,
            extensions,
        }
    }
}

/// Errors that can occur during directory traversal.
///
/// Always yielded inline by the walker and recovered by the caller;
/// traversal itself never aborts on a per-entry error.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// An I/O error occurred while reading a directory entry.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        Self::Io {
            path,
            source: err.into(),
        }
    }
}
