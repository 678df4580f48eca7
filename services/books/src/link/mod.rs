//! Remote link to the books-info service
//!
//! `BooksInfoLink` is the only seam between the composer and the network.
//! [`HttpLink`] talks GraphQL over HTTP; [`InProcessLink`] answers from
//! datasets held in memory.

pub mod error;
pub mod http;
pub mod in_process;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use types::entity::{Author, Publisher};
use types::filter::IdentifierFilter;

pub use error::LinkError;
pub use http::HttpLink;
pub use in_process::InProcessLink;

/// Variables of the `booksInfo` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub ids: IdentifierFilter,
}

impl CompositionRequest {
    pub fn new(ids: IdentifierFilter) -> Self {
        Self { ids }
    }
}

/// Authors and publishers matching a request
///
/// The two lists are related to each other and to books only through id
/// values, never through position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionResponse {
    pub authors: Vec<Author>,
    pub publishers: Vec<Publisher>,
}

#[async_trait]
pub trait BooksInfoLink: Send + Sync {
    /// One request/response exchange; exactly one result per call
    async fn execute(&self, request: CompositionRequest)
        -> Result<CompositionResponse, LinkError>;

    /// Cheap reachability check
    async fn probe(&self) -> Result<(), LinkError>;
}
