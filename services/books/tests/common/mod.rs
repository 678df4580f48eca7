#![allow(dead_code)]

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral localhost port
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A localhost address nothing is listening on
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn graphql_url(addr: SocketAddr) -> String {
    format!("http://{}/graphql", addr)
}

pub async fn spawn_books_info() -> SocketAddr {
    spawn(books_info::app(books_info::Catalog::builtin().unwrap())).await
}
