//! Caller-supplied identifier filter
//!
//! An empty filter is the "no restriction" sentinel: every record
//! matches. A non-empty filter admits exactly the records whose id it
//! contains. The same filter value is used for the local lookup and for
//! any remote fetch so both sides talk about one id set.
//!
//! Null entries from the query-language argument are kept. They count
//! toward the filter's length and are forwarded as sent, but match no
//! record, so `[null]` selects nothing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ids::EntityId;

/// Ordered sequence of ids; empty means "return everything"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierFilter(Vec<Option<EntityId>>);

impl IdentifierFilter {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EntityId>,
    {
        Self(ids.into_iter().map(|id| Some(id.into())).collect())
    }

    /// The unrestricted filter
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from a query-language `ids: [String]` argument
    ///
    /// A missing or null argument is the empty filter.
    pub fn from_argument(ids: Option<Vec<Option<String>>>) -> Self {
        Self(
            ids.unwrap_or_default()
                .into_iter()
                .map(|id| id.map(EntityId::from))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries as supplied, nulls and duplicates included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Non-null ids in caller order, duplicates included
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.0.iter().flatten()
    }

    /// Whether a record with this id passes the filter
    pub fn admits(&self, id: &EntityId) -> bool {
        self.is_empty() || self.ids().any(|wanted| wanted == id)
    }

    /// Borrowed lookup set for filtering many records at once
    pub(crate) fn id_set(&self) -> HashSet<&str> {
        self.ids().map(EntityId::as_str).collect()
    }
}
