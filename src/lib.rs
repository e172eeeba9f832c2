//! dupescan - Content-Hash Duplicate File Finder
//!
//! A cross-platform Rust CLI application for finding and removing duplicate
//! files. Files are fingerprinted with a streaming content hash (SHA-256 by
//! default, BLAKE3 optional) and grouped by fingerprint; scanning runs
//! either on a single thread or on a fixed-size worker pool, with identical
//! results either way.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use anyhow::Context;

use crate::cli::{Cli, OutputFormat, Strategy};
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::scanner::WalkerConfig;

/// Run the application logic for parsed CLI arguments.
///
/// Scans the requested directory, writes the duplicate report and, if
/// requested, deletes redundant copies. Returns the process exit code.
///
/// # Errors
///
/// Returns an error for fatal conditions only: an invalid scan root, a
/// worker pool that cannot be built, or a report that cannot be written.
/// Per-file scan and deletion failures are reported and recovered.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = FinderConfig {
        algorithm: cli.algorithm,
        chunk_size: cli.chunk_size,
        workers: cli.workers,
        walker: WalkerConfig::new(cli.exclude, cli.extensions),
    };
    let finder = DuplicateFinder::new(config);

    let result = match cli.strategy {
        Strategy::Serial => finder.find_duplicates(&cli.directory)?,
        Strategy::Parallel => finder.find_duplicates_parallel(&cli.directory)?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => output::write_text(&mut out, &result)?,
        OutputFormat::Json => output::write_json(&mut out, &result)?,
    }

    if cli.delete || cli.delete_all {
        let keep_one = !cli.delete_all;
        if !keep_one {
            log::warn!("--delete-all removes every copy of each duplicated content");
        }
        let summary = actions::remove_duplicates(&result, keep_one);

        for path in &summary.deleted {
            writeln!(out, "Deleted: {}", path.display()).context("failed to write report")?;
        }
        for (path, err) in &summary.failures {
            eprintln!("Error deleting {}: {}", path.display(), err);
        }
        log::info!(
            "Deleted {} file(s), {} failure(s)",
            summary.deleted_count(),
            summary.failure_count()
        );
    }

    Ok(ExitCode::Success)
}
