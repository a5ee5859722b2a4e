// src/report.rs
// =============================================================================
// Prints the outcome of a scan.
//
// - Summary counters go to stdout
// - One block per broken URL goes to stderr, already sorted by URL
// - With --json, the failure list is also printed to stdout as JSON
//
// The writers are parameters so tests can capture the output in a Vec<u8>.
// =============================================================================

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::scan::{FailureReport, ScanSummary};

pub fn print_report(summary: &ScanSummary, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write_summary(&mut out, summary)?;
    if json {
        write_json(&mut out, &summary.failures)?;
    }
    out.flush()?;

    let mut err = io::stderr().lock();
    write_failures(&mut err, &summary.failures)?;
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summary: &ScanSummary) -> io::Result<()> {
    writeln!(out, "Scanned files: {}", summary.files_scanned)?;
    writeln!(out, "Links found: {}", summary.links_found)?;
    writeln!(out, "Unique links checked: {}", summary.unique_links)?;
    writeln!(out, "Broken links: {}", summary.failures.len())
}

pub fn write_failures(out: &mut impl Write, failures: &[FailureReport]) -> io::Result<()> {
    for failure in failures {
        writeln!(out, "✗ {}", failure.url)?;
        writeln!(out, "    reason: {}", failure.reason)?;
        for occurrence in &failure.occurrences {
            writeln!(out, "    at {}:{}", occurrence.file.display(), occurrence.line)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    failures: &'a [FailureReport],
}

pub fn write_json(out: &mut impl Write, failures: &[FailureReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { failures })?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Occurrence;
    use std::path::PathBuf;

    fn summary() -> ScanSummary {
        ScanSummary {
            files_scanned: 2,
            links_found: 5,
            unique_links: 4,
            failures: vec![FailureReport {
                url: "https://example.com/gone".to_string(),
                reason: "HTTP 404".to_string(),
                occurrences: vec![
                    Occurrence { file: PathBuf::from("docs/a.md"), line: 3 },
                    Occurrence { file: PathBuf::from("docs/b.mdx"), line: 10 },
                ],
            }],
        }
    }

    #[test]
    fn test_summary_lines() {
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Scanned files: 2\nLinks found: 5\nUnique links checked: 4\nBroken links: 1\n"
        );
    }

    #[test]
    fn test_failure_block_lists_every_location() {
        let mut buf = Vec::new();
        write_failures(&mut buf, &summary().failures).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "✗ https://example.com/gone\n    reason: HTTP 404\n    at docs/a.md:3\n    at docs/b.mdx:10\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let mut buf = Vec::new();
        write_json(&mut buf, &summary().failures).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let failure = &value["failures"][0];
        assert_eq!(failure["url"], "https://example.com/gone");
        assert_eq!(failure["reason"], "HTTP 404");
        assert_eq!(failure["occurrences"][1]["file"], "docs/b.mdx");
        assert_eq!(failure["occurrences"][1]["line"], 10);
    }

    #[test]
    fn test_no_failures_prints_nothing_on_stderr() {
        let mut buf = Vec::new();
        write_failures(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
