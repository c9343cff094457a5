//! # Index Module
//!
//! Loading of the precomputed search index: depth-aware resolution of
//! the index file's location, the one-shot fetch, and construction of
//! the query engine held in shared state for the page's lifetime.
//!
//! ## Key Components
//!
//! - [`types`] - Wire types for the fetched index document
//! - [`loader`] - Fetch, parse and engine construction with the
//!   `Unloaded → Loading → Ready | Unavailable` state machine

pub mod loader;
pub mod types;

pub use loader::{IndexLoader, IndexState, SharedIndexState};
pub use types::{IndexDocument, PageEntry};
