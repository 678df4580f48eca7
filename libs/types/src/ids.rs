//! Identifier type shared by every entity kind
//!
//! Authors, publishers and books are all keyed by a plain string id, and
//! the same value is used to relate them: a book's author is the author
//! whose id equals the book's id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an Author, Publisher or Book
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_equality_is_by_value() {
        assert_eq!(EntityId::new("1"), EntityId::from("1"));
        assert_ne!(EntityId::new("1"), EntityId::new("01"));
    }

    #[test]
    fn test_entity_id_serialization() {
        let id = EntityId::new("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
