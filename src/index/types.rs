//! Wire types for the precomputed search index.
//!
//! The index is produced by the site build step and served as a static
//! JSON document at the documentation root. Page URLs inside it are
//! root-relative; depth correction happens at render time, never here.

use serde::{Deserialize, Serialize};

/// One indexed documentation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageEntry {
    /// Page title, shown as the result heading.
    pub title: String,
    /// Plain-text body used for matching and snippets.
    pub content: String,
    /// Path of the page relative to the documentation root,
    /// e.g. `guide/intro.html`. Never relative to a particular page.
    pub url: String,
}

/// Top-level shape of `search-index.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexDocument {
    /// Indexed pages; sequence order defines engine insertion order,
    /// not display order.
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_index_contract() {
        let raw = r#"{
            "pages": [
                {
                    "title": "Installation",
                    "content": "Run the installer.",
                    "url": "setup/install.html"
                }
            ]
        }"#;

        let document: IndexDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].url, "setup/install.html");
    }

    #[test]
    fn missing_pages_field_defaults_to_empty() {
        let document: IndexDocument = serde_json::from_str("{}").unwrap();
        assert!(document.pages.is_empty());
    }
}
