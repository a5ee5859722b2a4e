// src/checker/markdown.rs
// =============================================================================
// This module finds link targets written in Markdown syntax.
//
// Two shapes are recognized:
//   [text](https://example.com "optional title")   inline link
//   <https://example.com>                          autolink
//
// Images (`![alt](src)`) match the inline-link pattern too, so every match is
// checked for a leading `!` and images are dropped. The input is expected to
// have its fenced code blocks stripped already (see fences.rs).
//
// Why regexes and not a full CommonMark parser?
// - We need byte offsets for every hit to report line numbers
// - MDX files are not valid CommonMark; JSX blocks confuse real parsers
// - A heuristic that errs on the side of "found a link" is fine here, the
//   checker and the URL filter weed out anything odd
// =============================================================================

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::Hit;

// Link text may hold one level of nested brackets, which is what badge links
// look like: [![build](https://ci/badge.svg)](https://ci/project)
static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:[^\[\]]|\[[^\[\]]*\])*\]\(([^)]*)\)")
        .unwrap_or_else(|err| panic!("invalid inline link regex: {err}"))
});

static AUTOLINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<((?i:https?)://[^<>\s]+)>")
        .unwrap_or_else(|err| panic!("invalid autolink regex: {err}"))
});

/// Extracts the raw targets of inline links and autolinks, images excluded.
///
/// Hits are returned in no particular order; callers sort by offset.
pub fn markdown_hits(content: &str) -> Vec<Hit> {
    let mut hits = Vec::new();

    // Spans of every inline match, images included. An autolink inside one of
    // these is the link's own target (`[x](<https://a>)`), already handled.
    let mut inline_spans: Vec<Range<usize>> = Vec::new();

    for caps in INLINE_LINK.captures_iter(content) {
        let (Some(whole), Some(target)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        inline_spans.push(whole.range());

        if is_image(content, whole.start()) {
            continue;
        }

        let target = link_target(target.as_str());
        if !target.is_empty() {
            hits.push(Hit {
                offset: whole.start(),
                target: target.to_string(),
            });
        }
    }

    for caps in AUTOLINK.captures_iter(content) {
        let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let inside_inline = inline_spans
            .iter()
            .any(|span| span.start <= whole.start() && whole.end() <= span.end);
        if inside_inline {
            continue;
        }

        hits.push(Hit {
            offset: whole.start(),
            target: url.as_str().to_string(),
        });
    }

    hits
}

// `![alt](src)`: the match starts at `[` and the byte before it is `!`
fn is_image(content: &str, start: usize) -> bool {
    start > 0 && content.as_bytes()[start - 1] == b'!'
}

/// Pulls the URL out of what sits between the parentheses.
///
///   <https://a.com/x y>          -> https://a.com/x y
///   https://a.com "Title here"   -> https://a.com
fn link_target(raw: &str) -> &str {
    let raw = raw.trim();

    if let Some(rest) = raw.strip_prefix('<') {
        return rest.split('>').next().unwrap_or("").trim();
    }

    raw.split_whitespace().next().unwrap_or("").trim()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. What does LazyLock do here?
//    - Compiling a regex is expensive; LazyLock compiles it once, on first
//      use, and every later call reuses the compiled automaton
//
// 2. Why `let ... else`?
//    - captures_iter yields Option groups; when a group is missing we just
//      skip that match instead of unwrapping
//
// 3. Why check the byte before the match instead of a lookbehind?
//    - The regex crate guarantees linear time and so has no lookaround.
//      Looking one byte back by hand is the usual replacement.
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(content: &str) -> Vec<String> {
        let mut hits = markdown_hits(content);
        hits.sort_by_key(|h| h.offset);
        hits.into_iter().map(|h| h.target).collect()
    }

    #[test]
    fn test_extract_simple_link() {
        let markdown = "Check out [Rust](https://www.rust-lang.org)!";
        assert_eq!(targets(markdown), vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_extract_multiple_links() {
        let markdown = r#"
# Resources

- [Rust](https://www.rust-lang.org)
- [Cargo](https://doc.rust-lang.org/cargo/)
- [Docs](https://doc.rust-lang.org/)
        "#;
        let links = targets(markdown);
        assert_eq!(links.len(), 3);
        assert!(links.contains(&"https://doc.rust-lang.org/cargo/".to_string()));
    }

    #[test]
    fn test_image_is_not_a_link() {
        assert!(targets("![alt](https://x.com/a.png)").is_empty());
        assert!(targets("![logo](https://img.shields.io/badge/ok)").is_empty());
    }

    #[test]
    fn test_badge_yields_outer_target_only() {
        let markdown = "[![build](https://ci.example.com/badge)](https://ci.example.com/project)";
        assert_eq!(targets(markdown), vec!["https://ci.example.com/project"]);
    }

    #[test]
    fn test_title_is_dropped() {
        let markdown = r#"[docs](https://example.com/docs "The docs")"#;
        assert_eq!(targets(markdown), vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_angle_wrapped_target() {
        let markdown = "[docs](<https://example.com/a b> \"t\")";
        assert_eq!(targets(markdown), vec!["https://example.com/a b"]);
    }

    #[test]
    fn test_autolink() {
        let markdown = "Visit <https://example.com/page> or <HTTP://Example.org>.";
        assert_eq!(
            targets(markdown),
            vec!["https://example.com/page", "HTTP://Example.org"]
        );
    }

    #[test]
    fn test_autolink_inside_link_target_counted_once() {
        let markdown = "[x](<https://example.com>)";
        assert_eq!(targets(markdown), vec!["https://example.com"]);
    }

    #[test]
    fn test_autolink_inside_image_is_ignored() {
        assert!(targets("![x](<https://img.example.com/badge>)").is_empty());
    }

    #[test]
    fn test_non_http_autolink_ignored() {
        assert!(targets("<mailto:test@example.com> <div>").is_empty());
    }

    #[test]
    fn test_relative_targets_are_still_returned() {
        // filtering happens later; the matcher only finds link syntax
        assert_eq!(targets("See [docs](./docs/README.md)"), vec!["./docs/README.md"]);
    }

    #[test]
    fn test_empty_target_skipped() {
        assert!(targets("[nothing]()").is_empty());
    }
}
