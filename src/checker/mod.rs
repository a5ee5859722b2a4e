// src/checker/mod.rs
// =============================================================================
// This module contains all link extraction and link checking logic.
//
// Submodules:
// - fences:   blanks out fenced code blocks before matching
// - markdown: finds [text](url) links and <url> autolinks
// - html:     finds <a href="..."> anchors
// - filter:   keeps only external, non-image http(s) URLs
// - index:    merges per-document hits into one record per URL
// - http:     HEAD/GET liveness probe for a single URL
// - pool:     runs probes with a fixed concurrency cap
// =============================================================================

mod fences;
mod filter;
mod html;
mod http;
mod index;
mod markdown;
mod pool;

pub use http::{CheckResult, LinkChecker};
pub use index::{LinkIndex, Occurrence};
pub use pool::run_pool;

/// A raw link target found by one of the matchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    /// Byte offset of the match in the code-stripped document
    pub offset: usize,
    /// The target as written, not yet validated
    pub target: String,
}
