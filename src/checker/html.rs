// src/checker/html.rs
// =============================================================================
// This module finds links written as raw HTML anchors inside Markdown/MDX.
//
//   <a href="https://example.com">...</a>
//   <A class="btn" HREF='https://example.com'>...</A>
//
// The tag name and attribute name are matched case-insensitively, and either
// quote style works. We scan the document text directly rather than building
// a DOM: documentation files are mostly Markdown, and we need the byte offset
// of every anchor to compute its line number.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::Hit;

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .unwrap_or_else(|err| panic!("invalid anchor regex: {err}"))
});

/// Extracts the href of every `<a>` tag in `content`.
///
/// Relative hrefs are returned as-is; the URL filter drops them later.
pub fn html_hits(content: &str) -> Vec<Hit> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let href = caps.get(1).or_else(|| caps.get(2))?;
            let target = href.as_str().trim();

            (!target.is_empty()).then(|| Hit {
                offset: whole.start(),
                target: target.to_string(),
            })
        })
        .collect()
}
