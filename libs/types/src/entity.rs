//! Entity records
//!
//! Author, Publisher and BookRecord are seeded once and never mutated.
//! `Book` is the per-request composition of a BookRecord with the author
//! and publisher that share its id.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// Anything stored in a [`Dataset`](crate::dataset::Dataset)
pub trait Entity {
    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    fn id(&self) -> &EntityId;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for Author {
    const KIND: &'static str = "author";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: EntityId,
    pub name: String,
}

impl Publisher {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for Publisher {
    const KIND: &'static str = "publisher";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Stored book: relations are not part of the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: EntityId,
    pub name: String,
}

impl BookRecord {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for BookRecord {
    const KIND: &'static str = "book";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A book as returned to callers, with its relations resolved
///
/// `author` and `publisher` are `None` when no entity of that kind has the
/// book's id. That is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub name: String,
    pub author: Option<Author>,
    pub publisher: Option<Publisher>,
}

impl Book {
    /// Start composing from a stored record, with no relations set
    pub fn from_record(record: BookRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            author: None,
            publisher: None,
        }
    }

    pub fn with_author(mut self, author: Option<Author>) -> Self {
        self.author = author;
        self
    }

    pub fn with_publisher(mut self, publisher: Option<Publisher>) -> Self {
        self.publisher = publisher;
        self
    }
}
