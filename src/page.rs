//! Host page description.
//!
//! The controller never touches the DOM directly; the host describes
//! the page it rendered with a [`Page`] and the feature decides from
//! that whether to attach at all.

use std::collections::HashSet;

use reqwest::Url;

/// The page hosting the search feature, as the template rendered it.
#[derive(Debug, Clone)]
pub struct Page {
    url: String,
    location_path: String,
    element_ids: HashSet<String>,
}

impl Page {
    /// Describes a page by its full URL and the element ids present in
    /// its DOM.
    pub fn new<I, S>(url: impl Into<String>, element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let url = url.into();
        // Bare paths (no scheme/host) are taken as the location itself.
        let location_path = Url::parse(&url)
            .map(|parsed| parsed.path().to_string())
            .unwrap_or_else(|_| url.clone());

        Self {
            url,
            location_path,
            element_ids: element_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Full URL of the page, used to resolve the index fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path component of the page URL, e.g. `/guide/intro.html`.
    pub fn location_path(&self) -> &str {
        &self.location_path
    }

    /// Whether an element with `id` exists in the page.
    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }
}
