//! # docsite-search
//!
//! Client-side search runtime for statically generated documentation
//! sites: fetches the precomputed `search-index.json`, answers fuzzy
//! queries as the user types, and emits rendered result fragments
//! whose links are corrected for the current page's depth in the site
//! tree.
//!
//! The host (page template, webview shell, wasm bridge) owns the DOM.
//! It describes the page with [`Page`], calls [`init`] on page ready,
//! forwards input/keyboard/click events to the [`SearchController`],
//! and applies the [`PanelUpdate`] stream to the results panel.
//!
//! ```no_run
//! use docsite_search::{Page, init};
//!
//! # async fn page_ready() {
//! let page = Page::new(
//!     "https://docs.example.com/guide/intro.html",
//!     ["search-input", "search-results"],
//! );
//! if let Some(mut search) = init(&page) {
//!     search.controller.on_input("install");
//!     while let Some(update) = search.updates.recv().await {
//!         // apply `update` to the DOM
//!     }
//! }
//! # }
//! ```

pub mod controller;
pub mod index;
pub mod page;
pub mod path;
pub mod search;

use tokio::sync::mpsc;

pub use controller::{PanelUpdate, SearchController};
pub use index::{IndexDocument, IndexLoader, IndexState, PageEntry};
pub use page::Page;
pub use search::{FuzzySearcher, QueryResult, ResolvedResult, SearchOutcome};

/// A live search feature for one page view.
pub struct SearchHandle {
    /// Event entry points for the host's listeners.
    pub controller: SearchController,
    /// Rendered panel updates for the host to apply.
    pub updates: mpsc::UnboundedReceiver<PanelUpdate>,
}

/// Wires up the search feature for a page view.
///
/// The index fetch starts in the background either way; `None` means
/// the page lacks the search elements and no listeners should be
/// attached. Must be called within a tokio runtime.
pub fn init(page: &Page) -> Option<SearchHandle> {
    let loader = IndexLoader::new();
    let state = loader.state();

    let page_url = page.url().to_string();
    tokio::spawn(async move { loader.load(&page_url).await });

    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let controller = SearchController::attach(page, state, updates_tx)?;

    Some(SearchHandle {
        controller,
        updates: updates_rx,
    })
}
