//! AI Provider Port - interface to the external model endpoint.
//!
//! The assistant gateway is deliberately narrow: one blocking
//! request/response completion per question, no streaming, no retry.
//! Provider adapters translate transport and API failures into
//! [`AiError`] so the flow controller can surface them as messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for chat-completion providers.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generates a single completion and returns the whole answer at once.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError>;
}

/// One completion request: an optional system prompt selecting the tone,
/// the conversation messages (here, a single user question), and fixed
/// sampling parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub system_prompt: Option<String>,
    /// Sampling temperature; the composer pins this to 0.
    pub temperature: Option<f32>,
    /// Generation cap, when the provider wants one.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Role of the message sender, serialized in the OpenAI-compatible
/// lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Completion result.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated answer text.
    pub content: String,
    /// Model that produced it.
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the answer.
    Stop,
    /// Hit the token cap.
    Length,
    /// Content was filtered.
    ContentFilter,
}

/// Gateway failure, reported to the user rather than retried.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AiError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
