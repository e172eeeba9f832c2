//! Directory walker for file enumeration.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for recursively traversing a
//! directory tree and yielding the regular files in it. Traversal is
//! single-threaded and deterministic (entries sorted by file name); both the
//! serial and the parallel duplicate finder use the same walker, so the two
//! strategies always see the same candidate files in the same order.
//!
//! Filtering is applied during the walk:
//! - excluded directories are pruned (not descended into),
//! - files are restricted to the configured extensions, if any,
//! - non-regular entries (directories, symlinks, devices) are skipped.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig::new(
//!     vec!["node_modules".into()],
//!     vec!["txt".to_string(), ".md".to_string()],
//! );
//! let walker = Walker::new(Path::new("."), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Warning: {e}"),
//!     }
//! }
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{ScanError, WalkerConfig};

/// Recursive directory walker with exclude and extension filters.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path, config: WalkerConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Check whether a directory entry matches an exclude rule.
    ///
    /// Single-component excludes match the directory name anywhere in the
    /// tree; multi-component excludes match a trailing path.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        self.config.exclude.iter().any(|excluded| {
            if excluded.components().count() == 1 {
                entry.file_name() == excluded.as_os_str()
            } else {
                entry.path().ends_with(excluded)
            }
        })
    }

    /// Check whether a file passes the extension filter.
    fn matches_extension(&self, path: &Path) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .is_some_and(|ext| self.config.extensions.iter().any(|e| *e == ext))
    }

    /// Walk the tree, yielding regular files in discovery order.
    ///
    /// Traversal errors (unreadable directories, broken entries) are yielded
    /// as [`ScanError`] values rather than stopping iteration; a single
    /// unreadable entry must never abort the whole scan.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !self.is_excluded(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    // Only regular files are hashed; symlinks are not
                    // followed, so a symlink to a file is skipped here too.
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    if !self.matches_extension(entry.path()) {
                        log::trace!("Skipping by extension: {}", entry.path().display());
                        return None;
                    }
                    Some(Ok(entry.into_path()))
                }
                Err(err) => Some(Err(ScanError::from(err))),
            })
    }
}
