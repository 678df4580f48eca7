//! Books Service
//!
//! Serves `books(ids: [String]): [Book]`. Book records are local; each
//! book's `author` and `publisher` are fetched from the books-info
//! service in one request per query and joined on by id.
//!
//! # Flow
//!
//! ```text
//! books(ids) ──► BookComposer ──┬──► local BookRecord selection
//!                               └──► BooksInfoLink::execute(ids)
//!                                         │
//!                                    books-info /graphql
//!                                         │
//!                  join by id ◄───────────┘
//! ```

pub mod bookshelf;
pub mod compose;
pub mod config;
pub mod link;
pub mod ready;
pub mod schema;

use axum::{routing::get, Router};

pub use compose::BookComposer;
pub use schema::{build_schema, BooksQuery};

pub const SERVICE_NAME: &str = "books";

/// Full HTTP application: `/graphql`, `/health` and `/ready`
pub fn app(composer: BookComposer) -> Router {
    let readiness = Router::new()
        .route("/ready", get(ready::ready))
        .with_state(composer.link().clone());

    let router = server_kit::router::create_router(build_schema(composer), SERVICE_NAME)
        .merge(readiness);

    server_kit::router::with_http_layers(router)
}
