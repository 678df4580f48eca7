//! Types library for the books services
//!
//! Holds the entity records served by both services, the identifier
//! filter callers pass in, and the read-only datasets the records live in.
//!
//! # Modules
//! - `ids`: Entity identifiers (EntityId)
//! - `entity`: Author, Publisher, BookRecord and the composed Book
//! - `filter`: IdentifierFilter (empty means "everything")
//! - `dataset`: Immutable, shareable record collections
//! - `query`: Id-filtered selection over a dataset
//! - `seed`: JSON seed file loading
//! - `graphql`: Query-language output shapes for the entities
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod entity;
pub mod filter;
pub mod dataset;
pub mod query;
pub mod seed;
pub mod graphql;
pub mod errors;
