//! Read-only record collections
//!
//! A dataset is built once at startup and then shared by every request.
//! Cloning is a reference-count bump, never a copy of the records.

use std::collections::HashSet;
use std::sync::Arc;

use crate::entity::Entity;
use crate::errors::DatasetError;

#[derive(Debug)]
pub struct Dataset<T> {
    records: Arc<[T]>,
}

impl<T> Clone for Dataset<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Entity> Dataset<T> {
    /// Build a dataset, keeping the given order
    ///
    /// Ids must be unique within the collection.
    pub fn new(records: Vec<T>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id().as_str()) {
                return Err(DatasetError::DuplicateId {
                    kind: T::KIND,
                    id: record.id().to_string(),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }
}

impl<T> Dataset<T> {
    /// The complete collection in seed order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
