//! Books Info Service
//!
//! Serves author and publisher records from a fixed in-memory catalog:
//! - `authors(ids: [String]): [Author]`
//! - `publishers(ids: [String]): [Publisher]`
//!
//! An empty or missing `ids` argument returns the whole collection.

pub mod catalog;
pub mod config;
pub mod schema;

use axum::Router;

pub use catalog::Catalog;
pub use schema::{build_schema, BooksInfoQuery};

pub const SERVICE_NAME: &str = "books-info";

/// Full HTTP application for a catalog
pub fn app(catalog: Catalog) -> Router {
    server_kit::router::with_http_layers(server_kit::router::create_router(
        build_schema(catalog),
        SERVICE_NAME,
    ))
}
