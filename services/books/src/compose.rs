//! Book composition
//!
//! A book's author is the author whose id equals the book's id, and the
//! same for its publisher. There is no foreign-key field: the id value
//! itself is the join key across entity kinds.
//!
//! The local selection and the remote fetch always use the same filter,
//! and the remote fetch is issued even when no local book matched.

use std::collections::HashMap;
use std::sync::Arc;

use types::dataset::Dataset;
use types::entity::{Book, BookRecord, Entity};
use types::filter::IdentifierFilter;
use types::ids::EntityId;
use types::query::select;

use crate::link::{BooksInfoLink, CompositionRequest, CompositionResponse, LinkError};

#[derive(Clone)]
pub struct BookComposer {
    books: Dataset<BookRecord>,
    link: Arc<dyn BooksInfoLink>,
}

impl BookComposer {
    pub fn new(books: Dataset<BookRecord>, link: Arc<dyn BooksInfoLink>) -> Self {
        Self { books, link }
    }

    pub fn link(&self) -> &Arc<dyn BooksInfoLink> {
        &self.link
    }

    /// Books admitted by `filter`, in dataset order, with relations joined
    ///
    /// Fails as a whole when the books-info exchange fails.
    #[tracing::instrument(skip(self, filter), fields(filter_len = filter.len()))]
    pub async fn resolve(&self, filter: &IdentifierFilter) -> Result<Vec<Book>, LinkError> {
        let selected = select(&self.books, filter);

        let related = self
            .link
            .execute(CompositionRequest::new(filter.clone()))
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, kind = e.kind(), "books-info exchange failed")
            })?;

        tracing::debug!(
            books = selected.len(),
            authors = related.authors.len(),
            publishers = related.publishers.len(),
            "composing books"
        );

        Ok(compose(selected, related))
    }
}

/// Join each record to the first author and publisher sharing its id
pub fn compose(records: Vec<BookRecord>, related: CompositionResponse) -> Vec<Book> {
    let mut authors = index_by_id(related.authors);
    let mut publishers = index_by_id(related.publishers);

    records
        .into_iter()
        .map(|record| {
            // Book ids are unique, so each related entity is used at most once
            let author = authors.remove(&record.id);
            let publisher = publishers.remove(&record.id);
            Book::from_record(record)
                .with_author(author)
                .with_publisher(publisher)
        })
        .collect()
}

/// First occurrence wins for a repeated id
fn index_by_id<T: Entity>(entities: Vec<T>) -> HashMap<EntityId, T> {
    let mut index = HashMap::with_capacity(entities.len());
    for entity in entities {
        index.entry(entity.id().clone()).or_insert(entity);
    }
    index
}
