use anyhow::Context;
use books_info::{app, config::Config, Catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    server_kit::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting books-info service");

    let catalog = Catalog::load(&config.dataset).context("Failed to load catalog")?;
    tracing::info!(
        authors = catalog.authors.len(),
        publishers = catalog.publishers.len(),
        "Catalog loaded"
    );

    let addr = config.server.socket_addr()?;
    server_kit::server::serve(app(catalog), addr, "Books info server ready").await
}
