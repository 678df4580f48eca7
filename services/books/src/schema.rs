use async_graphql::{Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema};
use server_kit::graphql::QuerySchema;
use types::entity::Book;
use types::filter::IdentifierFilter;

use crate::compose::BookComposer;

pub struct BooksQuery {
    composer: BookComposer,
}

#[Object]
impl BooksQuery {
    /// Books whose id is in `ids` (all books when empty), each with the
    /// author and publisher sharing its id
    ///
    /// A failed books-info exchange nulls this field and reports the error;
    /// it never yields books with missing relations.
    async fn books(
        &self,
        ctx: &Context<'_>,
        ids: Option<Vec<Option<String>>>,
    ) -> Option<Vec<Option<Book>>> {
        let filter = IdentifierFilter::from_argument(ids);
        match self.composer.resolve(&filter).await {
            Ok(books) => Some(books.into_iter().map(Some).collect()),
            Err(e) => {
                ctx.add_error(e.extend().into_server_error(ctx.item.pos));
                None
            }
        }
    }
}

pub fn build_schema(composer: BookComposer) -> QuerySchema<BooksQuery> {
    Schema::build(BooksQuery { composer }, EmptyMutation, EmptySubscription).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookshelf::builtin_books;
    use crate::link::{BooksInfoLink, CompositionRequest, CompositionResponse, InProcessLink, LinkError};
    use async_graphql::value;
    use async_trait::async_trait;
    use std::sync::Arc;
    use types::dataset::Dataset;
    use types::entity::{Author, Publisher};

    fn in_process_schema() -> QuerySchema<BooksQuery> {
        let link = InProcessLink::new(
            Dataset::new(vec![
                Author::new("1", "J. R. R. Tolkien"),
                Author::new("2", "Frank Herbert"),
            ])
            .unwrap(),
            Dataset::new(vec![Publisher::new("2", "Chilton Books")]).unwrap(),
        );
        build_schema(BookComposer::new(builtin_books().unwrap(), Arc::new(link)))
    }

    struct DownLink;

    #[async_trait]
    impl BooksInfoLink for DownLink {
        async fn execute(&self, _: CompositionRequest) -> Result<CompositionResponse, LinkError> {
            Err(LinkError::Transport("connection refused".into()))
        }

        async fn probe(&self) -> Result<(), LinkError> {
            Err(LinkError::Transport("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_books_with_nested_relations() {
        let response = in_process_schema()
            .execute(r#"{ books(ids: ["2", "1"]) { id name author { name } publisher { name } } }"#)
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data,
            value!({
                "books": [
                    {
                        "id": "1",
                        "name": "The Hobbit",
                        "author": { "name": "J. R. R. Tolkien" },
                        "publisher": null
                    },
                    {
                        "id": "2",
                        "name": "Dune",
                        "author": { "name": "Frank Herbert" },
                        "publisher": { "name": "Chilton Books" }
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_books_without_argument_returns_all() {
        let response = in_process_schema().execute("{ books { id } }").await;
        assert_eq!(
            response.data,
            value!({
                "books": [
                    { "id": "1" }, { "id": "2" }, { "id": "3" }, { "id": "4" }, { "id": "5" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_remote_failure_is_query_error_not_empty_relations() {
        let schema = build_schema(BookComposer::new(builtin_books().unwrap(), Arc::new(DownLink)));

        let response = schema.execute("{ books { id author { name } } }").await;

        assert_eq!(response.data, value!({ "books": null }));
        assert_eq!(response.errors.len(), 1);

        let extensions = response.errors[0].extensions.as_ref().expect("extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("REMOTE_UNAVAILABLE"))
        );
    }

    #[tokio::test]
    async fn test_all_null_ids_match_no_book() {
        let response = in_process_schema()
            .execute(r#"{ books(ids: [null]) { id author { name } } }"#)
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(response.data, value!({ "books": [] }));
    }
}
