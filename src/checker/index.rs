// src/checker/index.rs
// =============================================================================
// Turns documents into a deduplicated set of URLs to check.
//
// Pipeline for one document:
//   1. blank out fenced code blocks (line count unchanged)
//   2. run the Markdown and HTML matchers over the result
//   3. order hits by position, map each to its 1-based line
//   4. keep only external, non-image http(s) URLs
//
// Every surviving URL is recorded in a LinkIndex keyed by the normalized URL,
// so the same link used in ten files is checked once and reported with all
// ten locations.
// =============================================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::fences::strip_fenced_blocks;
use super::filter::checkable_url;
use super::html::html_hits;
use super::markdown::markdown_hits;

/// A place in the docs where a URL appears
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub file: PathBuf,
    /// 1-based
    pub line: usize,
}

/// Extracts every checkable URL in `content` with the line it sits on.
///
/// URLs come back normalized (see filter.rs) and in document order.
pub fn extract_links(content: &str) -> Vec<(String, usize)> {
    let stripped = strip_fenced_blocks(content);

    let mut hits = markdown_hits(&stripped);
    hits.extend(html_hits(&stripped));
    hits.sort_by_key(|hit| hit.offset);

    let newlines: Vec<usize> = stripped
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == b'\n').then_some(i))
        .collect();

    hits.into_iter()
        .filter_map(|hit| {
            let url = checkable_url(&hit.target)?;
            let line = newlines.partition_point(|&pos| pos < hit.offset) + 1;
            Some((url, line))
        })
        .collect()
}

/// All link records for a run: normalized URL -> where it was seen.
#[derive(Debug, Default)]
pub struct LinkIndex {
    records: BTreeMap<String, Vec<Occurrence>>,
    total: usize,
}

impl LinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts links from one document and merges them into the index.
    ///
    /// Returns how many link occurrences the document contributed.
    pub fn add_document(&mut self, file: &Path, content: &str) -> usize {
        let links = extract_links(content);
        let count = links.len();

        for (url, line) in links {
            self.records.entry(url).or_default().push(Occurrence {
                file: file.to_path_buf(),
                line,
            });
        }

        self.total += count;
        count
    }

    /// Every occurrence seen, duplicates included
    pub fn total_links(&self) -> usize {
        self.total
    }

    /// Number of distinct URLs
    pub fn unique_links(&self) -> usize {
        self.records.len()
    }

    /// Distinct URLs in ascending order
    pub fn urls(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn occurrences(&self, url: &str) -> &[Occurrence] {
        self.records.get(url).map(Vec::as_slice).unwrap_or(&[])
    }
}
