//! Index fetching and engine construction.
//!
//! The loader resolves `search-index.json` relative to the current
//! page, fetches it once per page view, and promotes the shared state
//! to `Ready` with a built engine. Every failure mode degrades to
//! `Unavailable`: a warning is logged and callers keep treating the
//! index as not ready, indefinitely. Nothing is retried.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use reqwest::Url;
use tokio::sync::RwLock;

use crate::index::types::IndexDocument;
use crate::path::index_path;
use crate::search::fuzzy::FuzzySearcher;
use crate::search::indexer::PageIndexer;

/// Load state of the page-wide search index.
///
/// `Loading → Ready` on success; `Loading → Unavailable` on any fetch,
/// status or parse failure. `Unavailable` is terminal for the page
/// view.
pub enum IndexState {
    Unloaded,
    Loading,
    Ready(FuzzySearcher),
    Unavailable,
}

/// Shared handle to the index state, one per page view.
pub type SharedIndexState = Arc<RwLock<IndexState>>;

/// Fetches the search index and builds the query engine.
pub struct IndexLoader {
    client: reqwest::Client,
    state: SharedIndexState,
}

impl IndexLoader {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
            state: Arc::new(RwLock::new(IndexState::Unloaded)),
        }
    }

    /// Shared state handle for controllers.
    pub fn state(&self) -> SharedIndexState {
        self.state.clone()
    }

    /// Fetches the index relative to `page_url` and builds the engine.
    ///
    /// Infallible from the caller's perspective: failures log a
    /// warning and leave the state `Unavailable`.
    pub async fn load(&self, page_url: &str) {
        *self.state.write().await = IndexState::Loading;

        match self.fetch_and_build(page_url).await {
            Ok(searcher) => {
                tracing::debug!("Search index ready ({} pages)", searcher.page_count());
                *self.state.write().await = IndexState::Ready(searcher);
            }
            Err(error) => {
                tracing::warn!("Search index not available: {error:#}");
                *self.state.write().await = IndexState::Unavailable;
            }
        }
    }

    async fn fetch_and_build(&self, page_url: &str) -> Result<FuzzySearcher> {
        let page = Url::parse(page_url).with_context(|| format!("Invalid page URL: {page_url}"))?;

        let relative = index_path(page.path());
        let index_url = page
            .join(&relative)
            .with_context(|| format!("Failed to resolve index location: {relative}"))?;

        tracing::debug!("Fetching search index from {index_url}");

        let response = self
            .client
            .get(index_url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch {index_url}"))?;

        if !response.status().is_success() {
            bail!(
                "Search index not found at {index_url}: HTTP {}",
                response.status()
            );
        }

        let document: IndexDocument = response
            .json()
            .await
            .context("Malformed search index document")?;

        let indexer = PageIndexer::build(&document).context("Failed to build search index")?;
        Ok(FuzzySearcher::new(&indexer, document.pages))
    }
}

impl Default for IndexLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the HTTP client used for the single index fetch.
fn build_http_client() -> reqwest::Client {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to create HTTP client") // HTTP client creation should not fail with proper configuration
}
