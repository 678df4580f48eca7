//! JSON seed files
//!
//! Services ship built-in records but can start from a file instead.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::errors::DatasetError;

/// Read and deserialize a seed file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
