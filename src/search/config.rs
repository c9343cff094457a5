//! Configuration constants for the search feature.
//!
//! These mirror the contracts baked into the page template and the
//! index build step; the feature has no runtime configuration surface.

use std::time::Duration;

/// File name of the precomputed index at the documentation root.
pub const INDEX_FILE_NAME: &str = "search-index.json";

/// DOM id of the query input element.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// DOM id of the results container element.
pub const SEARCH_RESULTS_ID: &str = "search-results";

/// Idle window a keystroke must survive before its query executes.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Minimum query length (in characters) below which no match attempt
/// is made.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results rendered per query.
pub const MAX_RESULTS: usize = 10;

/// Characters of page content shown in a result snippet.
pub const SNIPPET_LEN: usize = 150;

/// Edit distance for fuzzy term matching.
pub const FUZZY_DISTANCE: u8 = 1;

/// Buffer size for the tantivy index writer (50MB).
pub const WRITER_BUFFER_SIZE: usize = 50_000_000;
