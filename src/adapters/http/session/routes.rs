//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_session, get_session, save_grades, send_question, SessionAppState};

/// Creates the session router with all endpoints.
pub fn session_routes(state: SessionAppState) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session))
        .route("/:id/grades", post(save_grades))
        .route("/:id/chat", post(send_question))
        .with_state(state)
}
