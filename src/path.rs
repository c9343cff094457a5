//! Path depth arithmetic for pages and result links.
//!
//! The search index lives at the documentation root while pages live
//! anywhere in the directory tree, so every path the search feature
//! touches is corrected by the depth of the current page. Two depth
//! rules exist and they are deliberately different:
//!
//! - [`page_depth`] describes the page hosting the search box. Empty
//!   segments and a literal `index.html` segment are discarded, so a
//!   directory-index page sits at its directory's depth.
//! - [`url_depth`] describes a root-relative result URL from the index,
//!   where only empty segments are discarded.

use crate::search::config::INDEX_FILE_NAME;

/// Directory depth of the current page below the documentation root.
///
/// Splits on `/`, discards empty segments and a literal `index.html`,
/// then excludes the page's own filename when the path ends in `.html`.
/// Saturates at zero so `/index.html` maps to the root.
pub fn page_depth(location_path: &str) -> usize {
    let segments = location_path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "index.html")
        .count();
    segments.saturating_sub(usize::from(location_path.ends_with(".html")))
}

/// Directory depth of a root-relative result URL.
///
/// Unlike [`page_depth`], an `index.html` segment counts here; only the
/// trailing `.html` filename is excluded from the count.
pub fn url_depth(url: &str) -> usize {
    let segments = url.split('/').filter(|segment| !segment.is_empty()).count();
    segments.saturating_sub(usize::from(url.ends_with(".html")))
}

/// Location of the index file relative to the current page.
///
/// Depth 0 yields `./search-index.json`; depth *n* yields *n* `../`
/// segments in front of the file name.
pub fn index_path(location_path: &str) -> String {
    let depth = page_depth(location_path);
    if depth == 0 {
        format!("./{INDEX_FILE_NAME}")
    } else {
        format!("{}{INDEX_FILE_NAME}", "../".repeat(depth))
    }
}

/// Rewrites a root-relative result URL so it resolves from the current
/// page.
///
/// When the current page sits deeper than the result, the difference is
/// prepended as `../` segments. Same-or-shallower pages use the stored
/// URL unchanged; no descend prefix is ever synthesized.
pub fn resolve_relative(result_url: &str, location_path: &str) -> String {
    let ascent = page_depth(location_path).saturating_sub(url_depth(result_url));
    if ascent > 0 {
        format!("{}{result_url}", "../".repeat(ascent))
    } else {
        result_url.to_string()
    }
}
