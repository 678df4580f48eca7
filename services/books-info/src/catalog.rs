//! Author and publisher datasets
//!
//! Seeded once at startup, from the built-in records or a JSON file, and
//! shared read-only by every request.

use serde::Deserialize;
use types::dataset::Dataset;
use types::entity::{Author, Publisher};
use types::errors::DatasetError;
use types::seed::load_json;

use crate::config::DatasetConfig;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub authors: Dataset<Author>,
    pub publishers: Dataset<Publisher>,
}

/// On-disk seed layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    pub authors: Vec<Author>,
    pub publishers: Vec<Publisher>,
}

impl Catalog {
    pub fn new(authors: Vec<Author>, publishers: Vec<Publisher>) -> Result<Self, DatasetError> {
        Ok(Self {
            authors: Dataset::new(authors)?,
            publishers: Dataset::new(publishers)?,
        })
    }

    pub fn from_seed(seed: CatalogSeed) -> Result<Self, DatasetError> {
        Self::new(seed.authors, seed.publishers)
    }

    /// Records shipped with the service
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(
            vec![
                Author::new("1", "J. R. R. Tolkien"),
                Author::new("2", "Frank Herbert"),
                Author::new("3", "Ursula K. Le Guin"),
                Author::new("4", "Isaac Asimov"),
            ],
            vec![
                Publisher::new("1", "George Allen & Unwin"),
                Publisher::new("2", "Chilton Books"),
                Publisher::new("3", "Parnassus Press"),
            ],
        )
    }

    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        match &config.path {
            Some(path) => Self::from_seed(load_json(path)?),
            None => Self::builtin(),
        }
    }
}
