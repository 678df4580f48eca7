use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initializes the tracing/logging infrastructure for a service.
///
/// `RUST_LOG` wins over the configured filter when set. JSON output is
/// meant for log shippers, the default is human-readable.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| anyhow::anyhow!("Invalid logging.filter {:?}: {}", config.filter, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
