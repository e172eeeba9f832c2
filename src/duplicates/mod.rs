//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Fingerprint aggregation and group management
//! - Serial and parallel scan strategies with identical results

pub mod finder;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, FinderError};
pub use groups::{DuplicateGroup, GroupBuilder, ScanResult};
