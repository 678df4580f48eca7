use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use server_kit::graphql::QuerySchema;
use types::entity::{Author, Publisher};
use types::filter::IdentifierFilter;
use types::query::select;

use crate::catalog::Catalog;

pub struct BooksInfoQuery {
    catalog: Catalog,
}

#[Object]
impl BooksInfoQuery {
    /// Authors whose id is in `ids`, or every author when `ids` is empty
    async fn authors(&self, ids: Option<Vec<Option<String>>>) -> Option<Vec<Option<Author>>> {
        let filter = IdentifierFilter::from_argument(ids);
        let authors = select(&self.catalog.authors, &filter);
        tracing::debug!(filter = filter.len(), matched = authors.len(), "authors query");
        Some(authors.into_iter().map(Some).collect())
    }

    /// Publishers whose id is in `ids`, or every publisher when `ids` is empty
    async fn publishers(
        &self,
        ids: Option<Vec<Option<String>>>,
    ) -> Option<Vec<Option<Publisher>>> {
        let filter = IdentifierFilter::from_argument(ids);
        let publishers = select(&self.catalog.publishers, &filter);
        tracing::debug!(filter = filter.len(), matched = publishers.len(), "publishers query");
        Some(publishers.into_iter().map(Some).collect())
    }
}

pub fn build_schema(catalog: Catalog) -> QuerySchema<BooksInfoQuery> {
    Schema::build(BooksInfoQuery { catalog }, EmptyMutation, EmptySubscription).finish()
}
