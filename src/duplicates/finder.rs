//! Duplicate finder with serial and parallel scan strategies.
//!
//! # Overview
//!
//! [`DuplicateFinder`] walks a directory tree, hashes every regular file and
//! groups paths by fingerprint. Two strategies are offered:
//!
//! - [`DuplicateFinder::find_duplicates`]: one thread does everything;
//!   traversal and hashing are interleaved.
//! - [`DuplicateFinder::find_duplicates_parallel`]: three phases. Paths are
//!   enumerated first (sequential, cheap), then hashed on a fixed-size rayon
//!   pool, then reduced in the original enumeration order.
//!
//! For a static tree the two strategies return identical results: same
//! groups, same member order. The parallel reducer re-associates hashes with
//! paths in enumeration order, so worker scheduling never leaks into the
//! output.
//!
//! Per-file failures (unreadable file, file removed between enumeration and
//! hashing) are logged and skipped; only an invalid root is fatal.

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use rayon::prelude::*;

use crate::scanner::{
    Fingerprint, HashAlgorithm, HashError, Hasher, Walker, WalkerConfig, DEFAULT_CHUNK_SIZE,
};

use super::groups::{GroupBuilder, ScanResult};

/// Errors that abort a scan before any file is hashed.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The root path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The root path could not be inspected.
    #[error("failed to read metadata for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The hashing worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for a duplicate scan.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Digest algorithm for content fingerprints.
    pub algorithm: HashAlgorithm,
    /// Chunk size in bytes for streaming reads.
    pub chunk_size: usize,
    /// Number of hashing workers for the parallel strategy.
    /// `None` means available CPU parallelism.
    pub workers: Option<usize>,
    /// Traversal filters, shared by both strategies.
    pub walker: WalkerConfig,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: None,
            walker: WalkerConfig::default(),
        }
    }
}

impl FinderConfig {
    /// Set the digest algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the chunk size for streaming reads.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the worker count for the parallel strategy.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    /// Set the traversal filters.
    #[must_use]
    pub fn with_walker(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }
}

/// Content-hash duplicate finder.
pub struct DuplicateFinder {
    hasher: Hasher,
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a finder from a configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let hasher = Hasher::new(config.algorithm).with_chunk_size(config.chunk_size);
        Self { hasher, config }
    }

    /// Create a finder with default configuration (SHA-256, 8 KiB chunks,
    /// CPU-count workers, no filters).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// The configuration this finder was built with.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Validate the scan root before any work begins.
    fn validate_root(root: &Path) -> Result<(), FinderError> {
        let metadata = fs::metadata(root).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FinderError::NotFound(root.to_path_buf())
            } else {
                FinderError::Io {
                    path: root.to_path_buf(),
                    source: e,
                }
            }
        })?;
        if !metadata.is_dir() {
            return Err(FinderError::NotADirectory(root.to_path_buf()));
        }
        Ok(())
    }

    /// Log and count a skipped file.
    fn skip(path: &Path, err: &HashError, skipped: &mut usize) {
        log::warn!("Skipping {}: {}", path.display(), err);
        *skipped += 1;
    }

    /// Find duplicate files under `root` using a single thread.
    ///
    /// Traverses the tree, hashes each regular file as it is discovered and
    /// groups paths by fingerprint. Unreadable files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] only if `root` is missing or not a directory.
    pub fn find_duplicates(&self, root: &Path) -> Result<ScanResult, FinderError> {
        Self::validate_root(root)?;

        let walker = Walker::new(root, self.config.walker.clone());
        let mut builder = GroupBuilder::new();
        let mut skipped = 0usize;

        for entry in walker.walk() {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Traversal error: {e}");
                    continue;
                }
            };
            match self.hasher.hash_file(&path) {
                Ok(fingerprint) => builder.insert(fingerprint, path),
                Err(e) => Self::skip(&path, &e, &mut skipped),
            }
        }

        Ok(Self::finish_scan(root, builder, skipped))
    }

    /// Find duplicate files under `root` using a fixed-size worker pool.
    ///
    /// Phase 1 enumerates candidate paths with the same traversal and
    /// filters as the serial strategy. Phase 2 hashes all paths on a rayon
    /// pool sized to [`FinderConfig::workers`] (default: available CPU
    /// parallelism), blocking until every path has a result. Phase 3 reduces
    /// path/fingerprint pairs in enumeration order, so the result is
    /// identical to the serial strategy for a static tree.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if `root` is missing, not a directory, or the
    /// worker pool cannot be built.
    pub fn find_duplicates_parallel(&self, root: &Path) -> Result<ScanResult, FinderError> {
        Self::validate_root(root)?;

        // Phase 1: enumeration, no hashing
        let walker = Walker::new(root, self.config.walker.clone());
        let mut paths = Vec::new();
        for entry in walker.walk() {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => log::warn!("Traversal error: {e}"),
            }
        }
        log::debug!("Enumerated {} candidate files", paths.len());

        // Phase 2: hashing on a fixed pool; workers share nothing mutable
        let workers = self.config.workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        log::debug!("Hashing on {workers} workers");

        let hasher = &self.hasher;
        let fingerprints: Vec<Result<Fingerprint, HashError>> =
            pool.install(|| paths.par_iter().map(|path| hasher.hash_file(path)).collect());

        // Phase 3: reduction in enumeration order
        let mut builder = GroupBuilder::new();
        let mut skipped = 0usize;
        for (path, result) in paths.into_iter().zip(fingerprints) {
            match result {
                Ok(fingerprint) => builder.insert(fingerprint, path),
                Err(e) => Self::skip(&path, &e, &mut skipped),
            }
        }

        Ok(Self::finish_scan(root, builder, skipped))
    }

    fn finish_scan(root: &Path, builder: GroupBuilder, skipped: usize) -> ScanResult {
        let hashed = builder.file_count();
        let result = builder.finish();
        log::info!(
            "Found {} groups of duplicate files under {} ({} files hashed, {} skipped)",
            result.len(),
            root.display(),
            hashed,
            skipped
        );
        result
    }
}
