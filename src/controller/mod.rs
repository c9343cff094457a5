//! # Controller Module
//!
//! Query handling: debounced input, search execution, link resolution
//! and dismissal. The controller never touches the DOM itself — it
//! emits [`PanelUpdate`]s on a channel and the host applies them to
//! the results panel. All entry points are synchronous so the host's
//! event listeners stay cheap; the debounce timer and query execution
//! run as tokio tasks.
//!
//! ## Key Components
//!
//! - [`SearchController`] - event entry points and the search operation
//! - [`render`] - HTML fragment rendering of outcomes

pub mod render;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::index::loader::{IndexState, SharedIndexState};
use crate::page::Page;
use crate::path::resolve_relative;
use crate::search::config::{
    DEBOUNCE_WINDOW, MAX_RESULTS, MIN_QUERY_LEN, SEARCH_INPUT_ID, SEARCH_RESULTS_ID,
};
use crate::search::outputs::{ResolvedResult, SearchOutcome};

/// DOM mutations the host applies to the results panel and the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelUpdate {
    /// Replace the panel content and mark it active.
    Show { html: String },
    /// Empty the panel and mark it inactive (query cleared).
    Clear,
    /// Mark the panel inactive without clearing it (dismissal).
    Dismiss,
    /// Drop focus from the search input (Escape).
    BlurInput,
}

/// Turns keystrokes into rendered, correctly-linked results.
pub struct SearchController {
    inner: Arc<ControllerInner>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct ControllerInner {
    state: SharedIndexState,
    location_path: String,
    updates: mpsc::UnboundedSender<PanelUpdate>,
}

impl SearchController {
    /// Attaches to the page, or declines when either search element is
    /// missing — the feature then stays inert, per the DOM contract.
    pub fn attach(
        page: &Page,
        state: SharedIndexState,
        updates: mpsc::UnboundedSender<PanelUpdate>,
    ) -> Option<Self> {
        if !page.has_element(SEARCH_INPUT_ID) || !page.has_element(SEARCH_RESULTS_ID) {
            return None;
        }

        Some(Self {
            inner: Arc::new(ControllerInner {
                state,
                location_path: page.location_path().to_string(),
                updates,
            }),
            pending: Mutex::new(None),
        })
    }

    /// Handles one input event with the current text of the box.
    ///
    /// Each call resets the debounce window, so only the last query in
    /// any 200 ms idle window executes. Sub-minimum queries clear the
    /// panel synchronously instead of querying.
    pub fn on_input(&self, raw_query: &str) {
        let query = raw_query.trim().to_string();

        let mut pending = self.lock_pending();
        if let Some(task) = pending.take() {
            task.abort();
        }

        if query.chars().count() < MIN_QUERY_LEN {
            self.inner.send(PanelUpdate::Clear);
            return;
        }

        let inner = Arc::clone(&self.inner);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE_WINDOW).await;
            let outcome = execute(&inner.state, &inner.location_path, &query).await;
            inner.send(PanelUpdate::Show {
                html: render::render(&outcome),
            });
        }));
    }

    /// Runs a query right now, bypassing the debounce timer.
    ///
    /// This is the operation the debounce task executes; it is public
    /// so hosts can trigger an immediate search (e.g. on submit).
    pub async fn search(&self, query: &str) -> SearchOutcome {
        execute(&self.inner.state, &self.inner.location_path, query).await
    }

    /// Escape pressed while the input has focus: hide the panel and
    /// release focus.
    pub fn on_escape(&self) {
        self.inner.send(PanelUpdate::Dismiss);
        self.inner.send(PanelUpdate::BlurInput);
    }

    /// A pointer event anywhere in the document. `target` is the id of
    /// the search element containing the click target, or `None` when
    /// the click landed outside both.
    pub fn on_click(&self, target: Option<&str>) {
        let inside = matches!(target, Some(SEARCH_INPUT_ID | SEARCH_RESULTS_ID));
        if !inside {
            self.inner.send(PanelUpdate::Dismiss);
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The slot only holds a task handle; a poisoned lock is usable.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ControllerInner {
    /// Send failures mean the host dropped the receiver (page
    /// teardown); updates are then discarded.
    fn send(&self, update: PanelUpdate) {
        let _ = self.updates.send(update);
    }
}

/// Executes a query against the shared index state.
///
/// Not-ready states produce the `Loading` sentinel. An engine failure
/// is logged and degrades to the same sentinel rather than surfacing
/// an error.
async fn execute(state: &SharedIndexState, location_path: &str, query: &str) -> SearchOutcome {
    let guard = state.read().await;
    let IndexState::Ready(searcher) = &*guard else {
        return SearchOutcome::Loading;
    };

    let results = match searcher.search(query, MAX_RESULTS) {
        Ok(results) => results,
        Err(error) => {
            tracing::warn!("Search failed for {query:?}: {error:#}");
            return SearchOutcome::Loading;
        }
    };

    if results.is_empty() {
        return SearchOutcome::NoResults;
    }

    let resolved = results
        .into_iter()
        .map(|result| ResolvedResult {
            display_url: resolve_relative(&result.entry.url, location_path),
            result,
        })
        .collect();

    SearchOutcome::Hits(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::loader::IndexState;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn page_with_both_elements() -> Page {
        Page::new(
            "https://docs.example.com/guide/intro.html",
            [SEARCH_INPUT_ID, SEARCH_RESULTS_ID],
        )
    }

    fn controller(
        state: IndexState,
    ) -> (SearchController, mpsc::UnboundedReceiver<PanelUpdate>) {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let controller = SearchController::attach(
            &page_with_both_elements(),
            Arc::new(RwLock::new(state)),
            updates_tx,
        )
        .expect("both search elements are present");
        (controller, updates_rx)
    }

    #[test]
    fn attach_declines_when_an_element_is_missing() {
        let (updates_tx, _updates_rx) = mpsc::unbounded_channel();
        let page = Page::new("https://docs.example.com/index.html", [SEARCH_INPUT_ID]);
        let attached = SearchController::attach(
            &page,
            Arc::new(RwLock::new(IndexState::Unloaded)),
            updates_tx,
        );
        assert!(attached.is_none());
    }

    #[test]
    fn sub_minimum_input_clears_synchronously() {
        let (controller, mut updates) = controller(IndexState::Unloaded);

        controller.on_input("a");
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::Clear);

        // Whitespace does not count toward the minimum length.
        controller.on_input("   a   ");
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::Clear);

        controller.on_input("");
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::Clear);
    }

    #[tokio::test]
    async fn queries_before_readiness_yield_the_loading_sentinel() {
        let (controller, _updates) = controller(IndexState::Unloaded);
        assert_eq!(controller.search("install").await, SearchOutcome::Loading);

        let (controller, _updates) = controller_unavailable();
        assert_eq!(controller.search("install").await, SearchOutcome::Loading);
    }

    fn controller_unavailable() -> (SearchController, mpsc::UnboundedReceiver<PanelUpdate>) {
        controller(IndexState::Unavailable)
    }

    #[test]
    fn escape_dismisses_and_blurs() {
        let (controller, mut updates) = controller(IndexState::Unloaded);

        controller.on_escape();
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::Dismiss);
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::BlurInput);
    }

    #[test]
    fn clicks_inside_the_search_elements_are_ignored() {
        let (controller, mut updates) = controller(IndexState::Unloaded);

        controller.on_click(Some(SEARCH_INPUT_ID));
        controller.on_click(Some(SEARCH_RESULTS_ID));
        assert!(updates.try_recv().is_err());

        controller.on_click(None);
        assert_eq!(updates.try_recv().unwrap(), PanelUpdate::Dismiss);
    }
}
