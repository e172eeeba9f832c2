//! Command-line interface definitions for dupescan.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Report duplicates under a directory
//! dupescan ~/Downloads
//!
//! # Delete redundant copies, keeping the first of each group
//! dupescan ~/Downloads --delete
//!
//! # Restrict the scan and emit JSON for scripting
//! dupescan ~/photos --exclude .thumbnails --extensions jpg --extensions png --output json
//!
//! # Force the single-threaded strategy
//! dupescan ~/Downloads --strategy serial
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::scanner::{HashAlgorithm, DEFAULT_CHUNK_SIZE};

/// Content-hash duplicate file finder.
///
/// Scans a directory tree, fingerprints every regular file and reports
/// groups of files with identical content, optionally deleting all but one
/// copy per group.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicates
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Delete duplicate files, keeping the first copy in each group
    #[arg(short, long)]
    pub delete: bool,

    /// Delete every file in each group, including the first copy
    ///
    /// Warning: this removes all copies of the duplicated content.
    #[arg(long, conflicts_with = "delete")]
    pub delete_all: bool,

    /// Directories to exclude from the scan, by name or path
    /// (can be specified multiple times)
    #[arg(short, long = "exclude", value_name = "DIR")]
    pub exclude: Vec<PathBuf>,

    /// Only consider files with these extensions
    /// (can be specified multiple times; case-insensitive, dot optional)
    #[arg(short = 'f', long = "extensions", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Scan strategy
    #[arg(long, value_enum, default_value = "parallel")]
    pub strategy: Strategy,

    /// Digest algorithm for content fingerprints
    #[arg(long, value_enum, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Chunk size in bytes for streaming file reads
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Number of hashing workers (default: available CPU parallelism)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Output format for the duplicate report
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Append log records to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Execution strategy for the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Single thread; traversal and hashing interleaved
    Serial,
    /// Enumerate first, then hash on a fixed-size worker pool
    Parallel,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report: fingerprint, then member paths
    Text,
    /// JSON array of duplicate groups for scripting
    Json,
}

/// Parse and validate the chunk size argument.
///
/// # Errors
///
/// Returns an error for zero or non-numeric input.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid chunk size: '{s}'"))?;
    if n == 0 {
        return Err("chunk size must be at least 1 byte".to_string());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let cli = Cli::try_parse_from(["dupescan", "/some/path"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("/some/path"));
        assert!(!cli.delete);
        assert!(!cli.delete_all);
        assert_eq!(cli.strategy, Strategy::Parallel);
        assert_eq!(cli.algorithm, HashAlgorithm::Sha256);
        assert_eq!(cli.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(cli.workers.is_none());
    }

    #[test]
    fn test_parse_filters() {
        let cli = Cli::try_parse_from([
            "dupescan",
            "/path",
            "--exclude",
            "node_modules",
            "--exclude",
            "target/debug",
            "--extensions",
            "txt",
            "-f",
            ".md",
        ])
        .unwrap();

        assert_eq!(
            cli.exclude,
            vec![PathBuf::from("node_modules"), PathBuf::from("target/debug")]
        );
        assert_eq!(cli.extensions, vec!["txt", ".md"]);
    }

    #[test]
    fn test_parse_strategy_and_algorithm() {
        let cli = Cli::try_parse_from([
            "dupescan",
            "/path",
            "--strategy",
            "serial",
            "--algorithm",
            "blake3",
            "--workers",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Strategy::Serial);
        assert_eq!(cli.algorithm, HashAlgorithm::Blake3);
        assert_eq!(cli.workers, Some(2));
    }

    #[test]
    fn test_delete_conflicts_with_delete_all() {
        let result = Cli::try_parse_from(["dupescan", "/path", "--delete", "--delete-all"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dupescan", "-v", "-q", "/path"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_directory() {
        let result = Cli::try_parse_from(["dupescan"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_chunk_size() {
        assert_eq!(parse_chunk_size("8192").unwrap(), 8192);
        assert_eq!(parse_chunk_size(" 1 ").unwrap(), 1);
        assert!(parse_chunk_size("0").is_err());
        assert!(parse_chunk_size("abc").is_err());
        assert!(parse_chunk_size("-1").is_err());
    }

    #[test]
    fn test_parse_output_json() {
        let cli = Cli::try_parse_from(["dupescan", "/path", "--output", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_log_file() {
        let cli = Cli::try_parse_from(["dupescan", "/path", "--log-file", "scan.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("scan.log")));
    }
}
