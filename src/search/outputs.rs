//! Output types for query execution.
//!
//! The sentinel presentation states are explicit [`SearchOutcome`]
//! variants so the renderer can never confuse "index not ready" with
//! "no matches".

use serde::{Deserialize, Serialize};

use crate::index::types::PageEntry;

/// A scored match straight from the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    /// The matched page.
    pub entry: PageEntry,
    /// 0.0 is the strongest match; larger is weaker, up to 1.0.
    pub score: f32,
}

/// A match with its link rewritten for the current page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedResult {
    /// The underlying match.
    pub result: QueryResult,
    /// Path that resolves correctly when followed from the current
    /// page.
    pub display_url: String,
}

/// What a keystroke-triggered search produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The engine is not ready: still loading, or terminally
    /// unavailable.
    Loading,
    /// The engine is ready and found nothing.
    NoResults,
    /// Ranked matches, best first, truncated and link-resolved.
    Hits(Vec<ResolvedResult>),
}
