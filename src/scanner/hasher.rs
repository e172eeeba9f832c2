//! Streaming file hasher with pluggable digest algorithms.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing content
//! fingerprints of files using memory-efficient streaming: the file is read
//! in bounded-size chunks and fed into an incremental digest, so memory use
//! is capped regardless of file size.
//!
//! Two files with equal fingerprints are treated as duplicates. Collisions
//! are not guarded against; both supported algorithms are 256-bit
//! cryptographic digests, so the collision probability is negligible for
//! any realistic corpus.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{HashAlgorithm, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new(HashAlgorithm::Sha256);
//! match hasher.hash_file(Path::new("document.pdf")) {
//!     Ok(fingerprint) => println!("{fingerprint}"),
//!     Err(e) => eprintln!("Warning: {e}"),
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Default chunk size for streaming reads (8 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Hex-encoded digest of a file's full byte content.
///
/// Opaque and fixed-format for a given algorithm: equal fingerprints mean
/// identical content, regardless of which algorithm produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// View the fingerprint as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex-encode a raw digest.
    fn from_digest(digest: &[u8]) -> Self {
        use std::fmt::Write;

        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supported content digest algorithms.
///
/// Correctness depends only on determinism (same content, same fingerprint)
/// and negligible collision probability, not on a specific algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HashAlgorithm {
    /// SHA-256 (default).
    #[default]
    Sha256,
    /// BLAKE3, considerably faster on large files.
    Blake3,
}

/// Errors that can occur while reading a file for hashing.
///
/// These are always recoverable from the caller's point of view: an
/// unreadable file is skipped, the scan continues.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found (it may have been removed mid-scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when opening or reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }
}

/// Incremental digest accumulator, dispatching on the chosen algorithm.
enum Digester {
    Sha256(Box<Sha256>),
    Blake3(Box<blake3::Hasher>),
}

impl Digester {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => Self::Sha256(Box::new(Sha256::new())),
            HashAlgorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(chunk),
            Self::Blake3(h) => {
                h.update(chunk);
            }
        }
    }

    fn finalize(self) -> Fingerprint {
        match self {
            Self::Sha256(h) => Fingerprint::from_digest(h.finalize().as_slice()),
            Self::Blake3(h) => Fingerprint::from_digest(h.finalize().as_bytes()),
        }
    }
}

/// Streaming content hasher.
///
/// Stateless between calls; cheap to share across worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    algorithm: HashAlgorithm,
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl Hasher {
    /// Create a hasher for the given algorithm with the default chunk size.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the chunk size for streaming reads.
    ///
    /// Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// The algorithm this hasher uses.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Compute the content fingerprint of a file.
    ///
    /// Reads the file sequentially in `chunk_size` byte chunks, feeding each
    /// into the incremental digest until end-of-file. The file handle is
    /// held only for the duration of the read and released on all exit
    /// paths.
    ///
    /// # Errors
    ///
    /// Returns a [`HashError`] carrying the path and the underlying cause if
    /// the file cannot be opened or read. Never panics.
    pub fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let mut digester = Digester::new(self.algorithm);
        let mut buf = vec![0u8; self.chunk_size];

        loop {
            let n = file.read(&mut buf).map_err(|e| HashError::from_io(path, e))?;
            if n == 0 {
                break;
            }
            digester.update(&buf[..n]);
        }

        Ok(digester.finalize())
    }
}
