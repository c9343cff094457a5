//! Tantivy indexing of fetched page entries.

use anyhow::{Context, Result};
use tantivy::{
    Index, IndexWriter, doc,
    schema::{FAST, Field, STORED, Schema, TEXT},
};

use crate::index::types::IndexDocument;
use crate::search::config::WRITER_BUFFER_SIZE;

/// In-RAM tantivy index over the pages of an [`IndexDocument`].
///
/// The index only lives for the current page view, so it is built in
/// memory rather than in a cache directory.
pub struct PageIndexer {
    index: Index,
    fields: PageFields,
}

/// Field handles for the page schema.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageFields {
    pub(crate) title: Field,
    pub(crate) content: Field,
    pub(crate) url: Field,
    pub(crate) ordinal: Field,
}

impl PageIndexer {
    /// Builds the index over `document.pages`, in document order.
    pub fn build(document: &IndexDocument) -> Result<Self> {
        let mut schema_builder = Schema::builder();

        // Matchable fields
        let title = schema_builder.add_text_field("title", TEXT);
        let content = schema_builder.add_text_field("content", TEXT);
        let url = schema_builder.add_text_field("url", TEXT);

        // Lookup key back into the fetched document, so result output
        // carries the original entry verbatim rather than re-assembled
        // stored fields.
        let ordinal = schema_builder.add_u64_field("ordinal", FAST | STORED);

        let schema = schema_builder.build();
        let index = Index::create_in_ram(schema);

        let mut writer: IndexWriter = index
            .writer(WRITER_BUFFER_SIZE)
            .context("Failed to create index writer")?;

        for (position, page) in document.pages.iter().enumerate() {
            writer
                .add_document(doc!(
                    title => page.title.clone(),
                    content => page.content.clone(),
                    url => page.url.clone(),
                    ordinal => position as u64
                ))
                .with_context(|| format!("Failed to index page: {}", page.url))?;
        }

        writer.commit().context("Failed to commit search index")?;

        Ok(Self {
            index,
            fields: PageFields {
                title,
                content,
                url,
                ordinal,
            },
        })
    }

    /// The underlying tantivy index.
    pub(crate) fn index(&self) -> &Index {
        &self.index
    }

    /// The schema field handles.
    pub(crate) fn fields(&self) -> PageFields {
        self.fields
    }
}
