//! Mock AI Provider for testing.
//!
//! Scripted responses and call recording, so tests can assert exactly
//! which prompt reached the gateway without touching the network.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new().with_response("Hello!");
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Hello!");
//! assert_eq!(provider.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason};

/// Mock AI provider with scripted responses, consumed in order.
///
/// When the script runs out, further calls answer with a fixed default
/// so simple tests do not need to enqueue anything.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion with this content.
    Success(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate a network error.
    Network { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AiError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AiError::RateLimited { retry_after_secs },
            MockError::Unavailable { message } => AiError::unavailable(message),
            MockError::AuthenticationFailed => AiError::AuthenticationFailed,
            MockError::Network { message } => AiError::network(message),
            MockError::Timeout { timeout_secs } => AiError::Timeout { timeout_secs },
        }
    }
}

impl MockAiProvider {
    /// Creates a new mock provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success(content.into()));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns every request this provider has received.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let scripted = self.responses.lock().unwrap().pop_front();
        match scripted {
            Some(MockResponse::Error(err)) => Err(err.into()),
            Some(MockResponse::Success(content)) => Ok(success(content)),
            None => Ok(success("mock answer".to_string())),
        }
    }
}

fn success(content: String) -> CompletionResponse {
    CompletionResponse {
        content,
        model: "mock-model".to_string(),
        finish_reason: FinishReason::Stop,
    }
}
