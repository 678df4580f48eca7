//! GraphQL-over-HTTP link
//!
//! POSTs `{ query, operationName, variables }` and reads back
//! `{ data, errors }`. A non-empty `errors` array fails the exchange even
//! if some `data` came back.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{BooksInfoLink, CompositionRequest, CompositionResponse, LinkError};

pub const BOOKS_INFO_OPERATION: &str = "booksInfo";

pub const BOOKS_INFO_QUERY: &str = r#"query booksInfo($ids: [String]) {
    authors(ids: $ids) {
        id
        name
    }
    publishers(ids: $ids) {
        id
        name
    }
}"#;

const PROBE_QUERY: &str = "{ __typename }";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<RemoteError>,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct HttpLink {
    client: Client,
    endpoint: String,
}

impl HttpLink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn post<V, T>(
        &self,
        query: &str,
        operation_name: Option<&str>,
        variables: V,
    ) -> Result<T, LinkError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            query,
            operation_name,
            variables,
        };

        let res = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| LinkError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LinkError::Status {
                status: status.as_u16(),
            });
        }

        let envelope = res.json::<GraphQlResponse<T>>().await.map_err(|e| {
            if e.is_decode() {
                LinkError::Malformed(e.to_string())
            } else {
                LinkError::Transport(e.to_string())
            }
        })?;

        if !envelope.errors.is_empty() {
            return Err(LinkError::Remote(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope
            .data
            .ok_or_else(|| LinkError::Malformed("response carries no data".to_string()))
    }
}

#[async_trait]
impl BooksInfoLink for HttpLink {
    async fn execute(
        &self,
        request: CompositionRequest,
    ) -> Result<CompositionResponse, LinkError> {
        tracing::debug!(endpoint = %self.endpoint, ids = request.ids.len(), "books-info request");
        self.post(BOOKS_INFO_QUERY, Some(BOOKS_INFO_OPERATION), request)
            .await
    }

    async fn probe(&self) -> Result<(), LinkError> {
        self.post::<_, serde_json::Value>(PROBE_QUERY, None, serde_json::json!({}))
            .await
            .map(|_| ())
    }
}
