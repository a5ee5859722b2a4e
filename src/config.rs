// src/config.rs
// =============================================================================
// Fixed configuration for a scan.
//
// Every knob has a constant default. The CLI may override a few of them, but
// running with no arguments always behaves exactly like these constants say.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Directory scanned when no path is given on the command line
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Per-attempt timeout for HEAD and GET requests
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of URL checks in flight at once
pub const MAX_CONCURRENCY: usize = 15;

/// Statuses that mean "exists but blocked us", not "broken"
pub const SOFT_BLOCK_STATUSES: [u16; 2] = [403, 429];

/// Link targets ending in one of these are hosted assets and are never checked
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "webp", "svg", "avif", "bmp", "ico",
];

/// Document extensions picked up by the directory walk
pub const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

// Several hosts answer non-browser clients with 403s or empty pages, so the
// probes look like an ordinary desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// The values a single run actually uses
#[derive(Debug, Clone)]
pub struct Settings {
    pub content_dir: PathBuf,
    pub timeout: Duration,
    pub concurrency: usize,
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
            concurrency: MAX_CONCURRENCY,
            json: false,
        }
    }
}

impl Settings {
    /// Same defaults, different content directory
    pub fn for_dir(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            ..Self::default()
        }
    }
}
