// src/checker/fences.rs
// =============================================================================
// Removes fenced code blocks before any link matching runs.
//
// Example snippets in docs are full of URLs that were never meant to be
// clicked (`curl https://api.example.com/...`). Each block is replaced by the
// newlines it contained, so a link below the block keeps its line number.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

// Lazy match: a block ends at the first closing ``` after it opens
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```").unwrap_or_else(|err| panic!("invalid fence regex: {err}"))
});

/// Returns `content` with every fenced block blanked out.
///
/// The result has exactly as many `\n` as the input. A fence that is never
/// closed is left untouched.
pub fn strip_fenced_blocks(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for block in FENCED_BLOCK.find_iter(content) {
        out.push_str(&content[last..block.start()]);
        let newlines = block.as_str().bytes().filter(|b| *b == b'\n').count();
        out.extend(std::iter::repeat('\n').take(newlines));
        last = block.end();
    }

    out.push_str(&content[last..]);
    out
}
