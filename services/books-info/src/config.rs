//! Configuration for the books-info service
//!
//! Environment variables use the `BOOKS_INFO__` prefix, e.g.
//! `BOOKS_INFO__SERVER__PORT=4001` or `BOOKS_INFO__DATASET__PATH=seed.json`.

use config::ConfigError;
use serde::Deserialize;
use server_kit::config::{common_defaults, LoggingConfig, ServerConfig};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// JSON seed file replacing the built-in records
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        server_kit::config::load("BOOKS_INFO", |builder| {
            common_defaults(builder, DEFAULT_PORT)
        })
    }
}

