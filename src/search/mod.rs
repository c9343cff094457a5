//! # Search Module
//!
//! Fuzzy search over the fetched page index, built on the tantivy
//! full-text search engine. The index is constructed in memory once
//! per page view and queried per debounced keystroke.
//!
//! ## Key Components
//!
//! - [`indexer`] - In-RAM tantivy indexing of fetched pages
//! - [`fuzzy`] - Fuzzy query execution with score normalization
//! - [`outputs`] - Result and sentinel types
//! - [`config`] - Configuration constants for the feature

pub mod config;
pub mod fuzzy;
pub mod indexer;
pub mod outputs;

pub use fuzzy::FuzzySearcher;
pub use indexer::PageIndexer;
pub use outputs::{QueryResult, ResolvedResult, SearchOutcome};
