//! HTTP adapters - the REST surface the browser UI talks to.

pub mod session;

pub use session::{session_routes, SessionAppState};

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full API router with tracing and CORS applied.
pub fn api_router(state: SessionAppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/session", session_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
