//! Layered configuration
//!
//! Defaults set by the service, then a `.env` file if present, then
//! environment variables under the service prefix (`BOOKS__SERVER__PORT`).

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.host {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

pub type Builder = ConfigBuilder<DefaultState>;

/// Defaults every service shares; the caller supplies its own port
pub fn common_defaults(builder: Builder, port: u16) -> Result<Builder, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", i64::from(port))?
        .set_default("logging.filter", "info")?
        .set_default("logging.json", false)
}

/// Load configuration for the service whose env prefix is `prefix`
pub fn load<T, F>(prefix: &str, defaults: F) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    F: FnOnce(Builder) -> Result<Builder, ConfigError>,
{
    dotenvy::dotenv().ok();

    defaults(config::Config::builder())?
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
