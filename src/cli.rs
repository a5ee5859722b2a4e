// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: scan a content directory. Every flag has a
// default taken from config.rs, so a bare `doc-link-check` run uses the fixed
// constants (content/, 15 concurrent checks, 10 second timeout).
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{self, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "doc-link-check",
    version,
    about = "Scan a documentation tree for broken external links",
    long_about = "doc-link-check walks a directory of .md/.mdx files, extracts every external \
                  http(s) link outside code blocks, and checks that each one still resolves. \
                  Exits 1 when any link is broken, so it drops straight into CI."
)]
pub struct Cli {
    /// Root of the documentation tree
    #[arg(default_value = config::DEFAULT_CONTENT_DIR)]
    pub content_dir: PathBuf,

    /// Also print the failure reports as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Maximum number of links checked at the same time
    #[arg(long, default_value_t = config::MAX_CONCURRENCY, value_parser = parse_positive)]
    pub concurrency: usize,

    /// Timeout for each HEAD or GET attempt, in milliseconds
    #[arg(long, default_value_t = config::REQUEST_TIMEOUT_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// clap's ranged parsers only cover the fixed-width integer types
fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.concurrency,
            json: self.json,
            ..Settings::for_dir(self.content_dir.clone())
        }
    }
}
