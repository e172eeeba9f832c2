//! dupescan - Content-Hash Duplicate File Finder
//!
//! Entry point for the dupescan CLI application.

use clap::Parser;
use dupescan::{cli::Cli, error::ExitCode, logging};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging before any scan work
    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Error: {err:#}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    // Run the application logic
    match dupescan::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
