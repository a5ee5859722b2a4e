// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging on stderr
// 3. Scan the content directory: extract links, then check them
// 4. Print the summary and the broken links
// 5. Exit with proper code (0 = all links ok, 1 = broken links or missing
//    content directory, 2 = unexpected error)
//
// Every check runs on a single-threaded runtime: the work is waiting on the
// network, and one thread interleaving up to 15 requests is plenty.
// =============================================================================

mod checker; // src/checker/ - link extraction and liveness checks
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - fixed constants and run settings
mod logging; // src/logging.rs - tracing setup
mod report; // src/report.rs - console and JSON output
mod scan; // src/scan/ - the two-stage pipeline

#[cfg(test)]
mod test_server;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use scan::ScanError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = cli.settings();

    let summary = match scan::run_scan(&settings).await {
        Ok(summary) => summary,
        Err(e) => {
            if let Some(code) = exit_code_for(&e) {
                eprintln!("{e}");
                return Ok(code);
            }
            return Err(e);
        }
    };

    report::print_report(&summary, settings.json)?;

    Ok(summary.exit_code())
}

// A missing content directory is a normal "nothing to scan" failure (exit 1).
// None means the error is unexpected and main() reports it with exit 2.
fn exit_code_for(error: &anyhow::Error) -> Option<i32> {
    match error.downcast_ref::<ScanError>()? {
        ScanError::MissingContentDir(_) | ScanError::NotADirectory(_) => Some(1),
    }
}
