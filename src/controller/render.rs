//! HTML rendering of search outcomes.
//!
//! Markup follows the page stylesheet's contract: one
//! `search-result-item` per entry, real results wrapped in an anchor
//! carrying a title line and a content snippet.

use crate::search::config::SNIPPET_LEN;
use crate::search::outputs::{ResolvedResult, SearchOutcome};

/// Status line shown while the index is loading or unavailable.
const LOADING_TEXT: &str = "Search index loading...";

/// Status line for a query with zero matches.
const NO_RESULTS_TEXT: &str = "No results found";

/// Renders an outcome to the results panel's inner HTML.
pub fn render(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Loading => status_line(LOADING_TEXT),
        SearchOutcome::NoResults => status_line(NO_RESULTS_TEXT),
        SearchOutcome::Hits(results) => results.iter().map(result_item).collect(),
    }
}

/// A single non-interactive informational line.
fn status_line(text: &str) -> String {
    format!(r#"<div class="search-result-item">{text}</div>"#)
}

fn result_item(result: &ResolvedResult) -> String {
    let entry = &result.result.entry;
    format!(
        concat!(
            r#"<div class="search-result-item">"#,
            r#"<a href="{href}">"#,
            r#"<div class="search-result-title">{title}</div>"#,
            r#"<div class="search-result-snippet">{snippet}</div>"#,
            "</a></div>"
        ),
        href = escape(&result.display_url),
        title = escape(&entry.title),
        snippet = escape(&snippet(&entry.content)),
    )
}

/// First [`SNIPPET_LEN`] characters of the content; the ellipsis is
/// appended whether or not anything was cut off.
fn snippet(content: &str) -> String {
    let mut text: String = content.chars().take(SNIPPET_LEN).collect();
    text.push_str("...");
    text
}

/// Minimal entity escaping for text and attribute positions.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
