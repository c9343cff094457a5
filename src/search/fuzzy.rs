//! Fuzzy query execution over the page index.

use anyhow::{Context, Result};
use tantivy::{
    Index, TantivyDocument, Term,
    collector::TopDocs,
    query::{BooleanQuery, FuzzyTermQuery, Occur, Query},
    schema::Value,
};

use crate::index::types::PageEntry;
use crate::search::config::{FUZZY_DISTANCE, MIN_QUERY_LEN};
use crate::search::indexer::{PageFields, PageIndexer};
use crate::search::outputs::QueryResult;

/// Fuzzy searcher over a built [`PageIndexer`].
///
/// Matches against `title`, `content` and `url` with typo-tolerant
/// prefix terms. Scores are reported as a deficit from the strongest
/// hit: 0.0 is the best match, 1.0 the upper bound, and ascending
/// order preserves the engine's own ranking and tie-breaks.
pub struct FuzzySearcher {
    index: Index,
    fields: PageFields,
    pages: Vec<PageEntry>,
}

impl FuzzySearcher {
    /// Creates a searcher from a built indexer and the entries it was
    /// built over.
    pub fn new(indexer: &PageIndexer, pages: Vec<PageEntry>) -> Self {
        Self {
            index: indexer.index().clone(),
            fields: indexer.fields(),
            pages,
        }
    }

    /// Number of pages the searcher was built over.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Runs `query` and returns up to `limit` results, weakest last.
    ///
    /// Queries shorter than the minimum length never reach the index.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<QueryResult>> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let reader = self.index.reader().context("Failed to open index reader")?;
        let searcher = reader.searcher();

        let top_docs = searcher
            .search(&self.build_query(query), &TopDocs::with_limit(limit))
            .with_context(|| format!("Query failed: {query}"))?;

        let best = top_docs.first().map(|(score, _)| *score).unwrap_or(0.0);

        let mut results = Vec::with_capacity(top_docs.len());
        for (raw, address) in top_docs {
            let matched: TantivyDocument = searcher
                .doc(address)
                .context("Failed to load matched document")?;
            let Some(entry) = self.entry_for(&matched) else {
                continue;
            };
            results.push(QueryResult {
                entry,
                score: deficit_score(raw, best),
            });
        }

        Ok(results)
    }

    /// Per-term fuzzy prefix clauses across the three matchable fields.
    fn build_query(&self, query: &str) -> BooleanQuery {
        let mut term_clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

        for term in query.split_whitespace() {
            let term = term.to_lowercase();
            let mut field_clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

            for field in [self.fields.title, self.fields.content, self.fields.url] {
                let fuzzy = FuzzyTermQuery::new_prefix(
                    Term::from_field_text(field, &term),
                    FUZZY_DISTANCE,
                    true, // a transposition counts as one edit
                );
                field_clauses.push((Occur::Should, Box::new(fuzzy)));
            }

            term_clauses.push((Occur::Should, Box::new(BooleanQuery::new(field_clauses))));
        }

        BooleanQuery::new(term_clauses)
    }

    /// Maps a matched document back to its fetched entry through the
    /// stored ordinal.
    fn entry_for(&self, matched: &TantivyDocument) -> Option<PageEntry> {
        let ordinal = matched
            .get_first(self.fields.ordinal)
            .and_then(|value| value.as_u64())?;
        self.pages.get(ordinal as usize).cloned()
    }
}

/// Deficit of a raw relevance score against the strongest hit of the
/// result set: 0.0 for the best match, growing toward 1.0 as relevance
/// drops.
fn deficit_score(raw: f32, best: f32) -> f32 {
    if best > 0.0 { 1.0 - raw / best } else { 0.0 }
}
