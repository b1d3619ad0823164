//! Request/response DTOs for the session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;
use crate::domain::grades::{ResponseStyle, SubjectGrades};
use crate::domain::session::SessionContext;

/// POST /api/session request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
}

/// POST /api/session/{id}/grades request body: the raw onboarding form
/// text, one `subject:grade` pair per line.
#[derive(Debug, Deserialize)]
pub struct SaveGradesRequest {
    pub input: String,
}

/// POST /api/session/{id}/chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Snapshot of a session, returned by login, grade save, and re-render.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub user_id: String,
    pub phase: String,
    /// Current grades, present while chatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<SubjectGrades>,
    /// Style recomputed from the grades on every render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ResponseStyle>,
    /// Reported store failure during login, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl SessionResponse {
    /// Builds a snapshot from a context.
    pub fn snapshot(session_id: SessionId, context: &SessionContext, notice: Option<String>) -> Self {
        let grades = context.grades().cloned();
        let style = grades.as_ref().map(ResponseStyle::classify);
        Self {
            session_id,
            user_id: context.user_id().to_string(),
            phase: if context.is_chatting() {
                "chatting".to_string()
            } else {
                "onboarding".to_string()
            },
            grades,
            style,
            notice,
        }
    }
}

/// Chat answer body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Standard error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn chatting_snapshot_includes_grades_and_style() {
        let grades: SubjectGrades = [("Math".to_string(), 90.0)].into_iter().collect();
        let ctx = SessionContext::chatting(UserId::new("u1").unwrap(), grades);
        let snapshot = SessionResponse::snapshot(SessionId::new(), &ctx, None);

        assert_eq!(snapshot.phase, "chatting");
        assert_eq!(snapshot.style, Some(ResponseStyle::Standard));
        assert!(snapshot.grades.is_some());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["style"], "standard");
        assert_eq!(json["grades"]["Math"], 90.0);
        assert!(json.get("notice").is_none());
    }

    #[test]
    fn onboarding_snapshot_has_no_grades() {
        let ctx = SessionContext::onboarding(UserId::new("u1").unwrap());
        let snapshot = SessionResponse::snapshot(SessionId::new(), &ctx, None);

        assert_eq!(snapshot.phase, "onboarding");
        assert!(snapshot.grades.is_none());
        assert!(snapshot.style.is_none());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("grades").is_none());
        assert!(json.get("style").is_none());
    }
}
