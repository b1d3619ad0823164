//! Per-session state.
//!
//! One [`SessionContext`] exists per browser session, created at login
//! and replaced by each successful transition. There is no ambient
//! global state; the flow controller takes a context and returns the
//! next one.

use crate::domain::foundation::UserId;
use crate::domain::grades::SubjectGrades;

/// Where a session currently is in the login -> onboarding -> chat flow.
///
/// `LoggedOut` has no representation here: before a successful login no
/// context exists at all.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Identifier accepted but no grades on record yet.
    Onboarding,
    /// Grades loaded or freshly saved; questions are accepted.
    Chatting { grades: SubjectGrades },
}

/// Explicit per-session context: the active identifier plus phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    user_id: UserId,
    phase: SessionPhase,
}

impl SessionContext {
    /// Context for a user with no stored grades.
    pub fn onboarding(user_id: UserId) -> Self {
        Self {
            user_id,
            phase: SessionPhase::Onboarding,
        }
    }

    /// Context for a user whose grades are in hand.
    pub fn chatting(user_id: UserId, grades: SubjectGrades) -> Self {
        Self {
            user_id,
            phase: SessionPhase::Chatting { grades },
        }
    }

    /// The identifier this session belongs to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Current phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// The held grades, when chatting.
    pub fn grades(&self) -> Option<&SubjectGrades> {
        match &self.phase {
            SessionPhase::Chatting { grades } => Some(grades),
            SessionPhase::Onboarding => None,
        }
    }

    /// True once grades are held and questions are accepted.
    pub fn is_chatting(&self) -> bool {
        matches!(self.phase, SessionPhase::Chatting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[test]
    fn onboarding_context_holds_no_grades() {
        let ctx = SessionContext::onboarding(user());
        assert!(!ctx.is_chatting());
        assert!(ctx.grades().is_none());
    }

    #[test]
    fn chatting_context_exposes_grades() {
        let grades: SubjectGrades = [("Math".to_string(), 90.0)].into_iter().collect();
        let ctx = SessionContext::chatting(user(), grades.clone());
        assert!(ctx.is_chatting());
        assert_eq!(ctx.grades(), Some(&grades));
        assert_eq!(ctx.user_id().as_str(), "u1");
    }
}
