//! Deletion of duplicate files.
//!
//! # Overview
//!
//! This module removes redundant copies from duplicate groups. By default
//! the first member of each group (discovery order) is kept and the rest
//! are deleted. With `keep_one = false` every member is deleted, including
//! the first; callers must warn the user, since that removes every copy of
//! the content.
//!
//! Deletion is best-effort per file: a failure on one path is recorded and
//! the remaining files in the group and in other groups are still
//! processed. There is no rollback; an interrupted run leaves some copies
//! deleted and others not.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::ScanResult;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (it may have been deleted or moved since the scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
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
}

/// Results of a batch deletion operation.
#[derive(Debug, Default)]
pub struct DeleteSummary {
    /// Successfully deleted paths, in deletion order.
    pub deleted: Vec<PathBuf>,
    /// Failed deletions with their errors.
    pub failures: Vec<(PathBuf, DeleteError)>,
}

impl DeleteSummary {
    /// Number of successful deletions.
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if all deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Delete duplicate files from every group in a scan result.
///
/// With `keep_one = true` the first member of each group is retained and
/// the rest are deleted. With `keep_one = false` all members are deleted,
/// removing every copy of the content.
///
/// Failures never abort the batch; each is recorded in the summary and
/// logged, and deletion continues with the remaining files.
#[must_use]
pub fn remove_duplicates(result: &ScanResult, keep_one: bool) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    for group in result.groups() {
        let victims = if keep_one {
            group.paths.get(1..).unwrap_or(&[])
        } else {
            &group.paths[..]
        };
        log::debug!(
            "Deleting {} of {} copies for {}",
            victims.len(),
            group.len(),
            group.fingerprint
        );

        for path in victims {
            match fs::remove_file(path) {
                Ok(()) => {
                    log::info!("Deleted {}", path.display());
                    summary.deleted.push(path.clone());
                }
                Err(e) => {
                    let err = DeleteError::from_io(path, e);
                    log::warn!("Failed to delete {}: {}", path.display(), err);
                    summary.failures.push((path.clone(), err));
                }
            }
        }
    }

    summary
}
