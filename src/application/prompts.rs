//! Prompt composition for the assistant gateway.
//!
//! Three fixed system templates, keyed by response style, plus the
//! `Question:` user message. The templates are part of the external
//! contract and must not be reworded.

use crate::domain::grades::ResponseStyle;
use crate::ports::{CompletionRequest, MessageRole};

/// System prompt for students with a standard grade average.
pub const STANDARD_PROMPT: &str = "You are a helpful assistant. Provide detailed and comprehensive answers to the student's queries.";

/// System prompt for the simplified tier.
pub const SIMPLIFIED_PROMPT: &str = "You are a helpful assistant. Provide clear and easy-to-understand answers to the student's queries.";

/// System prompt for the very-simplified tier.
pub const VERY_SIMPLIFIED_PROMPT: &str = "You are a helpful assistant. Provide very simple and easy-to-understand answers to the student's queries.";

/// Returns the system prompt template for a style.
pub fn system_prompt(style: ResponseStyle) -> &'static str {
    match style {
        ResponseStyle::Standard => STANDARD_PROMPT,
        ResponseStyle::Simplified => SIMPLIFIED_PROMPT,
        ResponseStyle::VerySimplified => VERY_SIMPLIFIED_PROMPT,
    }
}

/// Builds the completion request for one question.
///
/// The user message is `"Question:" + question` with no escaping, and
/// the temperature is pinned to 0. Callers must reject empty or
/// whitespace-only questions before composing.
pub fn compose(style: ResponseStyle, question: &str) -> CompletionRequest {
    CompletionRequest::new()
        .with_system_prompt(system_prompt(style))
        .with_message(MessageRole::User, format!("Question:{}", question))
        .with_temperature(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_matches_style() {
        assert_eq!(system_prompt(ResponseStyle::Standard), STANDARD_PROMPT);
        assert_eq!(system_prompt(ResponseStyle::Simplified), SIMPLIFIED_PROMPT);
        assert_eq!(
            system_prompt(ResponseStyle::VerySimplified),
            VERY_SIMPLIFIED_PROMPT
        );
    }

    #[test]
    fn templates_are_verbatim() {
        assert_eq!(
            STANDARD_PROMPT,
            "You are a helpful assistant. Provide detailed and comprehensive answers to the student's queries."
        );
        assert_eq!(
            SIMPLIFIED_PROMPT,
            "You are a helpful assistant. Provide clear and easy-to-understand answers to the student's queries."
        );
        assert_eq!(
            VERY_SIMPLIFIED_PROMPT,
            "You are a helpful assistant. Provide very simple and easy-to-understand answers to the student's queries."
        );
    }

    #[test]
    fn compose_builds_question_message_at_temperature_zero() {
        let request = compose(ResponseStyle::Standard, "What is velocity?");

        assert_eq!(request.system_prompt.as_deref(), Some(STANDARD_PROMPT));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "Question:What is velocity?");
        assert_eq!(request.temperature, Some(0.0));
    }
}
