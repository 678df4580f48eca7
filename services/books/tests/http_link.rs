//! HttpLink against a live books-info service and against misbehaving
//! endpoints.

mod common;

use axum::{http::StatusCode, routing::post, Json, Router};
use books::link::{BooksInfoLink, CompositionRequest, HttpLink, LinkError};
use serde_json::json;
use types::entity::{Author, Publisher};
use types::filter::IdentifierFilter;

fn request(ids: &[&str]) -> CompositionRequest {
    CompositionRequest::new(IdentifierFilter::new(ids.iter().copied()))
}

#[tokio::test]
async fn test_fetches_filtered_authors_and_publishers() {
    let addr = common::spawn_books_info().await;
    let link = HttpLink::new(common::graphql_url(addr));

    let response = link.execute(request(&["3", "2"])).await.unwrap();

    assert_eq!(
        response.authors,
        vec![Author::new("2", "Frank Herbert"), Author::new("3", "Ursula K. Le Guin")]
    );
    assert_eq!(
        response.publishers,
        vec![Publisher::new("2", "Chilton Books"), Publisher::new("3", "Parnassus Press")]
    );
}

#[tokio::test]
async fn test_empty_filter_fetches_everything() {
    let addr = common::spawn_books_info().await;
    let link = HttpLink::new(common::graphql_url(addr));

    let response = link.execute(request(&[])).await.unwrap();

    assert_eq!(response.authors.len(), 4);
    assert_eq!(response.publishers.len(), 3);
}

#[tokio::test]
async fn test_unknown_ids_give_empty_lists_not_errors() {
    let addr = common::spawn_books_info().await;
    let link = HttpLink::new(common::graphql_url(addr));

    let response = link.execute(request(&["404"])).await.unwrap();

    assert!(response.authors.is_empty());
    assert!(response.publishers.is_empty());
}

#[tokio::test]
async fn test_null_entries_forwarded_and_match_nothing() {
    let addr = common::spawn_books_info().await;
    let link = HttpLink::new(common::graphql_url(addr));

    let response = link
        .execute(CompositionRequest::new(IdentifierFilter::from_argument(Some(vec![None]))))
        .await
        .unwrap();

    assert!(response.authors.is_empty());
    assert!(response.publishers.is_empty());
}

#[tokio::test]
async fn test_probe_live_service() {
    let addr = common::spawn_books_info().await;
    let link = HttpLink::new(common::graphql_url(addr));
    assert_eq!(link.probe().await, Ok(()));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let addr = common::closed_addr().await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&[])).await;

    assert!(matches!(result, Err(LinkError::Transport(_))));
}

#[tokio::test]
async fn test_non_success_status_is_status_error() {
    let router = Router::new().route(
        "/graphql",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let addr = common::spawn(router).await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&["1"])).await;

    assert_eq!(result, Err(LinkError::Status { status: 500 }));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let router = Router::new().route("/graphql", post(|| async { "<html>hello</html>" }));
    let addr = common::spawn(router).await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&["1"])).await;

    assert!(matches!(result, Err(LinkError::Malformed(_))));
}

#[tokio::test]
async fn test_missing_data_is_malformed() {
    let router = Router::new().route("/graphql", post(|| async { Json(json!({})) }));
    let addr = common::spawn(router).await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&["1"])).await;

    assert!(matches!(result, Err(LinkError::Malformed(_))));
}

#[tokio::test]
async fn test_null_author_list_is_malformed() {
    let router = Router::new().route(
        "/graphql",
        post(|| async { Json(json!({ "data": { "authors": null, "publishers": [] } })) }),
    );
    let addr = common::spawn(router).await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&["1"])).await;

    assert!(matches!(result, Err(LinkError::Malformed(_))));
}

#[tokio::test]
async fn test_graphql_errors_are_remote_errors() {
    let router = Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({
                "data": { "authors": [], "publishers": [] },
                "errors": [{ "message": "resolver failed" }]
            }))
        }),
    );
    let addr = common::spawn(router).await;
    let link = HttpLink::new(common::graphql_url(addr));

    let result = link.execute(request(&["1"])).await;

    assert_eq!(result, Err(LinkError::Remote(vec!["resolver failed".to_string()])));
}
