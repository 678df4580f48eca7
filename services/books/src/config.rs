//! Configuration for the books service
//!
//! Environment variables use the `BOOKS__` prefix, e.g.
//! `BOOKS__REMOTE__ENDPOINT=http://books-info:4000/graphql`.

use config::ConfigError;
use serde::Deserialize;
use server_kit::config::{common_defaults, LoggingConfig, ServerConfig};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOOKS_INFO_ENDPOINT: &str = "http://localhost:4000/graphql";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// JSON seed file (`{ "books": [...] }`) replacing the built-in records
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// GraphQL endpoint of the books-info service
    pub endpoint: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        server_kit::config::load("BOOKS", |builder| {
            common_defaults(builder, DEFAULT_PORT)?
                .set_default("remote.endpoint", DEFAULT_BOOKS_INFO_ENDPOINT)
        })
    }
}
