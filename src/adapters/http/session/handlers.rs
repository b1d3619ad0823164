//! HTTP handlers for the session endpoints.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::FlowController;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::SessionContext;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, LoginRequest, SaveGradesRequest, SessionResponse,
};

/// Shared state for the session endpoints: the flow controller plus the
/// in-process registry of live session contexts.
///
/// The registry holds one context per browser session, keyed by the
/// server-issued session id. Concurrent writers to the same identifier
/// race with last-write-wins semantics, matching the store's own
/// per-document atomicity.
#[derive(Clone)]
pub struct SessionAppState {
    flow: Arc<FlowController>,
    sessions: Arc<Mutex<HashMap<SessionId, SessionContext>>>,
}

impl SessionAppState {
    pub fn new(flow: Arc<FlowController>) -> Self {
        Self {
            flow,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lookup(&self, id: &SessionId) -> Result<SessionContext, DomainError> {
        self.sessions
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, format!("Unknown session: {}", id))
            })
    }

    fn store(&self, id: SessionId, context: SessionContext) {
        self.sessions.lock().unwrap().insert(id, context);
    }
}

/// POST /api/session - Submit an identifier and start a session.
///
/// Always re-runs the login decision, so submitting a new identifier
/// restarts the machine for that identifier within the same process.
pub async fn create_session(
    State(state): State<SessionAppState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    match state.flow.submit_login(&req.user_id).await {
        Ok(outcome) => {
            let session_id = SessionId::new();
            state.store(session_id, outcome.context.clone());
            let body = SessionResponse::snapshot(session_id, &outcome.context, outcome.notice);
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/session/{id} - Current phase snapshot for re-render.
pub async fn get_session(
    State(state): State<SessionAppState>,
    Path(id): Path<SessionId>,
) -> Response {
    match state.lookup(&id) {
        Ok(context) => {
            let body = SessionResponse::snapshot(id, &context, None);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/session/{id}/grades - Submit the onboarding form.
pub async fn save_grades(
    State(state): State<SessionAppState>,
    Path(id): Path<SessionId>,
    Json(req): Json<SaveGradesRequest>,
) -> Response {
    let context = match state.lookup(&id) {
        Ok(context) => context,
        Err(e) => return error_response(e),
    };

    match state.flow.submit_grades(&context, &req.input).await {
        Ok(next) => {
            state.store(id, next.clone());
            let body = SessionResponse::snapshot(id, &next, None);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/session/{id}/chat - Ask the assistant a question.
pub async fn send_question(
    State(state): State<SessionAppState>,
    Path(id): Path<SessionId>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let context = match state.lookup(&id) {
        Ok(context) => context,
        Err(e) => return error_response(e),
    };

    match state.flow.submit_question(&context, &req.question).await {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { answer })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Converts a domain error into the standard JSON error response.
fn error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::StoreUnavailable | ErrorCode::QueryFailed => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::GatewayError => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse::new(err.code.to_string(), err.message);
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn lookup_of_unknown_session_is_not_found() {
        use crate::adapters::ai::MockAiProvider;
        use crate::adapters::memory::InMemoryGradeStore;

        let state = SessionAppState::new(Arc::new(FlowController::new(
            Arc::new(InMemoryGradeStore::new()),
            Arc::new(MockAiProvider::new()),
        )));

        let err = state.lookup(&SessionId::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn store_then_lookup_roundtrips() {
        use crate::adapters::ai::MockAiProvider;
        use crate::adapters::memory::InMemoryGradeStore;

        let state = SessionAppState::new(Arc::new(FlowController::new(
            Arc::new(InMemoryGradeStore::new()),
            Arc::new(MockAiProvider::new()),
        )));

        let id = SessionId::new();
        let ctx = SessionContext::onboarding(UserId::new("u1").unwrap());
        state.store(id, ctx.clone());
        assert_eq!(state.lookup(&id).unwrap(), ctx);
    }
}
