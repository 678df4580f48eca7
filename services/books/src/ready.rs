use axum::{extract::State, Json};
use serde_json::{json, Value};
use server_kit::AppError;
use std::sync::Arc;

use crate::link::BooksInfoLink;

/// Readiness: the books-info endpoint must answer before `books` can
pub async fn ready(State(link): State<Arc<dyn BooksInfoLink>>) -> Result<Json<Value>, AppError> {
    link.probe().await.map_err(|e| {
        tracing::warn!(error = %e, "books-info not reachable");
        AppError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Json(json!({ "status": "ready", "upstream": "books-info" })))
}
