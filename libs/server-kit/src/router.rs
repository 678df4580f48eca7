use async_graphql::ObjectType;
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graphql::{graphiql, graphql_handler, QuerySchema};

/// `/graphql` and `/health` for one service
pub fn create_router<Q>(schema: QuerySchema<Q>, service: &'static str) -> Router
where
    Q: ObjectType + 'static,
{
    let graphql_routes = Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler::<Q>))
        .with_state(schema);

    Router::new()
        .route(
            "/health",
            get(move || async move { Json(json!({ "status": "ok", "service": service })) }),
        )
        .merge(graphql_routes)
}

/// Cross-cutting layers, applied once every route is in place
pub fn with_http_layers(router: Router) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
