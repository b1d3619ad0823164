//! AI provider adapters.

mod groq_provider;
mod mock_provider;

pub use groq_provider::{GroqConfig, GroqProvider};
pub use mock_provider::{MockAiProvider, MockError, MockResponse};
