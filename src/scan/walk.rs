// src/scan/walk.rs
// =============================================================================
// Finds the documents to scan.
//
// Depth-first walk over the content directory, sorted by file name so two
// runs over the same tree list files in the same order. Only regular files
// ending in .md or .mdx are returned. Entries the walk cannot read are
// logged and skipped rather than failing the whole scan.
// =============================================================================

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::DOC_EXTENSIONS;

/// Lists every Markdown/MDX file under `root`.
pub fn find_documents(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_document(entry.path()))
        .map(|entry| {
            debug!(path = %entry.path().display(), "found document");
            entry.into_path()
        })
        .collect()
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
}

/// Reads a document's text. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD; a file that cannot be read at all is logged and skipped.
pub fn read_document(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            warn!(path = %path.display(), "skipping unreadable document: {err}");
            None
        }
    }
}
