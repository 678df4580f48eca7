use anyhow::Context;
use books::bookshelf::load_books;
use books::config::Config;
use books::link::{BooksInfoLink, HttpLink};
use books::{app, BookComposer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    server_kit::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting books service");

    let books = load_books(&config.dataset).context("Failed to load books")?;
    tracing::info!(
        books = books.len(),
        books_info = %config.remote.endpoint,
        "Bookshelf loaded"
    );

    let link: Arc<dyn BooksInfoLink> = Arc::new(HttpLink::new(config.remote.endpoint.clone()));
    let composer = BookComposer::new(books, link);

    let addr = config.server.socket_addr()?;
    server_kit::server::serve(app(composer), addr, "Books server ready").await
}
