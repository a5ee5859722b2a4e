// src/scan/mod.rs
// =============================================================================
// This module runs a whole scan, start to finish.
//
// How it works:
// 1. Make sure the content directory exists (anything else is fatal)
// 2. Read every .md/.mdx file and build the LinkIndex (synchronous)
// 3. Check each unique URL once, at most N at a time
// 4. Turn failed checks into FailureReports sorted by URL
//
// Nothing is persisted: every run starts from an empty index.
// =============================================================================

mod walk;

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::checker::{run_pool, CheckResult, LinkChecker, LinkIndex, Occurrence};
use crate::config::Settings;

pub use walk::{find_documents, read_document};

/// Problems that stop a scan before any link is checked
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("content directory not found: {}", .0.display())]
    MissingContentDir(PathBuf),

    #[error("content path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// One broken URL and everywhere it is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub url: String,
    pub reason: String,
    pub occurrences: Vec<Occurrence>,
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub links_found: usize,
    pub unique_links: usize,
    /// Sorted by URL, ascending
    pub failures: Vec<FailureReport>,
}

impl ScanSummary {
    /// 0 when every link passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() {
            0
        } else {
            1
        }
    }
}

/// Runs extraction over the content directory, then checks every unique URL.
pub async fn run_scan(settings: &Settings) -> Result<ScanSummary> {
    let (files_scanned, index) = index_content(settings)?;

    let mut summary = ScanSummary {
        files_scanned,
        links_found: index.total_links(),
        unique_links: index.unique_links(),
        failures: Vec::new(),
    };

    if index.unique_links() == 0 {
        return Ok(summary);
    }

    let checker = LinkChecker::new(settings.timeout)?;
    summary.failures = check_index(&index, &checker, settings.concurrency).await;

    info!(
        files = summary.files_scanned,
        unique = summary.unique_links,
        broken = summary.failures.len(),
        "scan finished"
    );
    Ok(summary)
}

// Stage one: read every document and merge its links into one index
fn index_content(settings: &Settings) -> Result<(usize, LinkIndex), ScanError> {
    let root = &settings.content_dir;
    if !root.exists() {
        return Err(ScanError::MissingContentDir(root.clone()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.clone()));
    }

    let mut index = LinkIndex::new();
    let mut files_scanned = 0;

    for file in find_documents(root) {
        let Some(content) = read_document(&file) else {
            continue;
        };
        files_scanned += 1;
        let count = index.add_document(&file, &content);
        debug!(file = %file.display(), links = count, "extracted links");
    }

    Ok((files_scanned, index))
}

/// Stage two: check each unique URL and collect the failures, sorted by URL.
pub async fn check_index(
    index: &LinkIndex,
    checker: &LinkChecker,
    concurrency: usize,
) -> Vec<FailureReport> {
    let urls = index.urls();

    let results = run_pool(&urls, concurrency, |url: String| async move {
        let result = checker.check(&url).await;
        (url, result)
    })
    .await;

    let mut failures: Vec<FailureReport> = results
        .into_iter()
        .filter_map(|(url, result)| failure_report(index, url, result))
        .collect();

    failures.sort_by(|a, b| a.url.cmp(&b.url));
    failures
}

fn failure_report(index: &LinkIndex, url: String, result: CheckResult) -> Option<FailureReport> {
    if result.ok {
        return None;
    }

    Some(FailureReport {
        occurrences: index.occurrences(&url).to_vec(),
        reason: result.reason.unwrap_or_else(|| "unknown error".to_string()),
        url,
    })
}
