//! GraphQL over HTTP
//!
//! JSON request in, JSON response out. Field errors travel inside the
//! response body with a 200 status; only an unreadable request body is
//! rejected at the HTTP level.

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, ObjectType, Schema};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Json,
};

use crate::error::AppError;

/// Query-only schema, the shape both services expose
pub type QuerySchema<Q> = Schema<Q, EmptyMutation, EmptySubscription>;

pub async fn graphql_handler<Q>(
    State(schema): State<QuerySchema<Q>>,
    payload: Result<Json<async_graphql::Request>, JsonRejection>,
) -> Result<Json<async_graphql::Response>, AppError>
where
    Q: ObjectType + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(schema.execute(request).await))
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
