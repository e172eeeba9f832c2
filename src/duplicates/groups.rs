//! Duplicate group types and fingerprint aggregation.
//!
//! # Overview
//!
//! This module provides [`DuplicateGroup`] and [`ScanResult`], the output
//! types of a scan, plus [`GroupBuilder`], the accumulator both scan
//! strategies feed. The builder keys paths by fingerprint while preserving
//! first-occurrence order, which is what makes serial and parallel scans
//! produce identical results: both insert in the walker's enumeration order.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new(FinderConfig::default());
//! let result = finder.find_duplicates(Path::new(".")).unwrap();
//! for group in result.groups() {
//!     println!("{} has {} copies", group.fingerprint, group.len());
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::scanner::Fingerprint;

/// A set of file paths sharing one content fingerprint.
///
/// Invariants for groups produced by a scan: at least 2 members, members in
/// discovery order, every member's content hashes to `fingerprint`.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// Content fingerprint shared by all members.
    pub fingerprint: Fingerprint,
    /// Member paths in discovery order.
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of copies beyond the first (candidates for deletion).
    #[must_use]
    pub fn redundant_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }
}

/// The result of one scan: duplicate groups keyed by fingerprint.
///
/// Keys are unique and groups appear in first-occurrence order, so the
/// result is deterministic for a static tree and identical across scan
/// strategies. Built fresh per scan invocation, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScanResult {
    groups: Vec<DuplicateGroup>,
}

impl ScanResult {
    /// All duplicate groups, in first-occurrence order.
    #[must_use]
    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    /// Look up a group by its fingerprint.
    #[must_use]
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&DuplicateGroup> {
        self.groups.iter().find(|g| g.fingerprint == *fingerprint)
    }

    /// Number of duplicate groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of redundant copies across all groups.
    #[must_use]
    pub fn total_redundant(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::redundant_count).sum()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a DuplicateGroup;
    type IntoIter = std::slice::Iter<'a, DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Accumulates fingerprint-to-paths buckets in first-occurrence order.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    index: HashMap<Fingerprint, usize>,
    buckets: Vec<DuplicateGroup>,
}

impl GroupBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path to the bucket for its fingerprint, creating the bucket
    /// on first occurrence.
    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf) {
        match self.index.get(&fingerprint) {
            Some(&idx) => self.buckets[idx].paths.push(path),
            None => {
                self.index.insert(fingerprint.clone(), self.buckets.len());
                self.buckets.push(DuplicateGroup {
                    fingerprint,
                    paths: vec![path],
                });
            }
        }
    }

    /// Total number of paths inserted so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.buckets.iter().map(|g| g.paths.len()).sum()
    }

    /// Finish, keeping only buckets with 2 or more members.
    #[must_use]
    pub fn finish(self) -> ScanResult {
        let groups = self
            .buckets
            .into_iter()
            .filter(|group| group.paths.len() > 1)
            .collect();
        ScanResult { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Hasher;
    use std::fs;
    use tempfile::tempdir;

    fn fingerprint_of(content: &str) -> Fingerprint {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f");
        fs::write(&path, content).unwrap();
        Hasher::default().hash_file(&path).unwrap()
    }

    #[test]
    fn test_builder_filters_singletons() {
        let dup = fingerprint_of("dup");
        let unique = fingerprint_of("unique");

        let mut builder = GroupBuilder::new();
        builder.insert(dup.clone(), PathBuf::from("/a"));
        builder.insert(unique, PathBuf::from("/b"));
        builder.insert(dup.clone(), PathBuf::from("/c"));

        let result = builder.finish();
        assert_eq!(result.len(), 1);
        let group = result.get(&dup).unwrap();
        assert_eq!(group.paths, vec![PathBuf::from("/a"), PathBuf::from("/c")]);
        assert_eq!(group.redundant_count(), 1);
    }

    #[test]
    fn test_builder_preserves_first_occurrence_order() {
        let first = fingerprint_of("first");
        let second = fingerprint_of("second");

        let mut builder = GroupBuilder::new();
        builder.insert(first.clone(), PathBuf::from("/1a"));
        builder.insert(second.clone(), PathBuf::from("/2a"));
        builder.insert(second.clone(), PathBuf::from("/2b"));
        builder.insert(first.clone(), PathBuf::from("/1b"));

        let result = builder.finish();
        let fingerprints: Vec<_> = result.groups().iter().map(|g| &g.fingerprint).collect();
        assert_eq!(fingerprints, vec![&first, &second]);
    }

    #[test]
    fn test_empty_builder_yields_empty_result() {
        let result = GroupBuilder::new().finish();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.total_redundant(), 0);
    }

    #[test]
    fn test_every_group_has_at_least_two_members() {
        let mut builder = GroupBuilder::new();
        for (content, count) in [("x", 3usize), ("y", 1), ("z", 2)] {
            let fp = fingerprint_of(content);
            for i in 0..count {
                builder.insert(fp.clone(), PathBuf::from(format!("/{content}{i}")));
            }
        }

        let result = builder.finish();
        assert_eq!(result.len(), 2);
        for group in &result {
            assert!(group.len() >= 2);
        }
        assert_eq!(result.total_redundant(), 3);
    }

    #[test]
    fn test_scan_result_serializes_to_json_array() {
        let dup = fingerprint_of("dup");
        let mut builder = GroupBuilder::new();
        builder.insert(dup.clone(), PathBuf::from("/a"));
        builder.insert(dup, PathBuf::from("/b"));

        let json = serde_json::to_value(builder.finish()).unwrap();
        let groups = json.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["paths"].as_array().unwrap().len(), 2);
        assert!(groups[0]["fingerprint"].is_string());
    }
}
