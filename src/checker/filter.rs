// src/checker/filter.rs
// =============================================================================
// Decides which extracted targets are worth a network check.
//
// Only absolute http(s) URLs on a real host survive. Relative paths, mailto:,
// tel:, localhost and anything the `url` crate refuses to parse are dropped
// silently: they are out of scope, not failures. Links to image assets are
// dropped too, whether they came from image syntax or a plain link.
// =============================================================================

use url::Url;

use crate::config::IMAGE_EXTENSIONS;

/// Parses `raw` and returns the normalized URL string if it should be checked.
///
/// Example:
///   "https://Example.com"      -> Some("https://example.com/")
///   "/docs/page"               -> None (relative)
///   "http://localhost:3000/x"  -> None
///   "https://x.com/a.png?v=2"  -> None (image asset)
pub fn checkable_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;

    if !is_external(&url) || is_image_asset(&url) {
        return None;
    }

    Some(url.to_string())
}

fn is_external(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| h != "localhost")
}

/// True when the last path segment ends in a known image extension.
///
/// `Url::path()` already excludes the query string and fragment.
pub fn is_image_asset(url: &Url) -> bool {
    let last_segment = url.path().rsplit('/').next().unwrap_or("");

    match last_segment.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|image| ext.eq_ignore_ascii_case(image)),
        None => false,
    }
}
