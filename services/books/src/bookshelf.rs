//! Local book records

use serde::Deserialize;
use types::dataset::Dataset;
use types::entity::BookRecord;
use types::errors::DatasetError;
use types::seed::load_json;

use crate::config::DatasetConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookshelfSeed {
    pub books: Vec<BookRecord>,
}

pub fn builtin_books() -> Result<Dataset<BookRecord>, DatasetError> {
    Dataset::new(vec![
        BookRecord::new("1", "The Hobbit"),
        BookRecord::new("2", "Dune"),
        BookRecord::new("3", "A Wizard of Earthsea"),
        BookRecord::new("4", "Foundation"),
        BookRecord::new("5", "Neuromancer"),
    ])
}

pub fn load_books(config: &DatasetConfig) -> Result<Dataset<BookRecord>, DatasetError> {
    match &config.path {
        Some(path) => {
            let seed: BookshelfSeed = load_json(path)?;
            Dataset::new(seed.books)
        }
        None => builtin_books(),
    }
}
