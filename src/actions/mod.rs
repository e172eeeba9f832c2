//! Actions that modify the filesystem based on scan results.

pub mod delete;

pub use delete::{remove_duplicates, DeleteError, DeleteSummary};
