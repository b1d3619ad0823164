//! Flow controller - the login -> onboarding -> chat state machine.
//!
//! Each user action is one synchronous transition over an explicit
//! [`SessionContext`]: validate, touch the store or gateway, return the
//! next context or an error. Every failure is converted at this boundary
//! into a [`DomainError`] with a user-visible message; nothing here
//! panics or crashes the process. A failed transition leaves the caller
//! holding the previous context unchanged.

use std::sync::Arc;

use tracing::{debug, error};

use crate::application::prompts;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::grades::{parse_subject_grades, ResponseStyle};
use crate::domain::session::SessionContext;
use crate::ports::{AiProvider, GradeStore, StoreError};

/// Result of a login: the new session context, plus a notice when the
/// store could not be consulted and the user was routed to onboarding.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub context: SessionContext,
    pub notice: Option<String>,
}

/// Orchestrates the session workflow against the store and the gateway.
pub struct FlowController {
    store: Arc<dyn GradeStore>,
    provider: Arc<dyn AiProvider>,
}

impl FlowController {
    pub fn new(store: Arc<dyn GradeStore>, provider: Arc<dyn AiProvider>) -> Self {
        Self { store, provider }
    }

    /// Handles an identifier submission from the logged-out state.
    ///
    /// An empty or whitespace identifier is rejected and no context is
    /// created. Otherwise the store is consulted: a non-empty grades
    /// mapping moves straight to chatting, anything else (absent, empty,
    /// or a reported store failure) lands in onboarding.
    pub async fn submit_login(&self, input: &str) -> Result<LoginOutcome, DomainError> {
        let user_id = UserId::new(input)?;

        match self.store.get(&user_id).await {
            Ok(Some(grades)) if !grades.is_empty() => {
                debug!(user_id = %user_id, subjects = grades.len(), "login: grades found, chatting");
                Ok(LoginOutcome {
                    context: SessionContext::chatting(user_id, grades),
                    notice: None,
                })
            }
            Ok(_) => {
                debug!(user_id = %user_id, "login: no grades on record, onboarding");
                Ok(LoginOutcome {
                    context: SessionContext::onboarding(user_id),
                    notice: None,
                })
            }
            Err(err) => {
                // Store failures are reported but treated as "no data";
                // the user can still onboard once the store recovers.
                error!(user_id = %user_id, error = %err, "login: grade store lookup failed");
                Ok(LoginOutcome {
                    context: SessionContext::onboarding(user_id),
                    notice: Some(err.to_string()),
                })
            }
        }
    }

    /// Handles the onboarding form submission.
    ///
    /// Parsing is all-or-nothing: a single malformed line fails the
    /// batch and nothing is saved. On success the mapping is upserted
    /// and the session moves to chatting with the parsed grades, without
    /// re-querying the store.
    pub async fn submit_grades(
        &self,
        context: &SessionContext,
        input: &str,
    ) -> Result<SessionContext, DomainError> {
        if context.is_chatting() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Grades are already on record for this session",
            ));
        }

        let grades = parse_subject_grades(input)
            .map_err(|err| DomainError::new(ErrorCode::InvalidFormat, err.to_string()))?;

        let user_id = context.user_id().clone();
        self.store
            .upsert(&user_id, &grades)
            .await
            .map_err(store_error)?;

        debug!(user_id = %user_id, subjects = grades.len(), "grades saved, chatting");
        Ok(SessionContext::chatting(user_id, grades))
    }

    /// Handles a chat question.
    ///
    /// The response style is recomputed from the held grades on every
    /// call. Empty questions are rejected before the gateway is invoked;
    /// gateway failures come back as reported errors, never panics.
    pub async fn submit_question(
        &self,
        context: &SessionContext,
        question: &str,
    ) -> Result<String, DomainError> {
        let grades = context.grades().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Enter your subjects and grades before chatting",
            )
        })?;

        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                "Please enter a valid question",
            ));
        }

        let style = ResponseStyle::classify(grades);
        let request = prompts::compose(style, question);

        debug!(user_id = %context.user_id(), style = %style, "asking assistant");
        let response = self.provider.complete(request).await.map_err(|err| {
            error!(user_id = %context.user_id(), error = %err, "assistant gateway failed");
            DomainError::new(ErrorCode::GatewayError, err.to_string())
        })?;

        Ok(response.content)
    }
}

fn store_error(err: StoreError) -> DomainError {
    let code = match err {
        StoreError::Disabled(_) => ErrorCode::StoreUnavailable,
        StoreError::Query(_) => ErrorCode::QueryFailed,
    };
    error!(error = %err, "grade store write failed");
    DomainError::new(code, err.to_string())
}
