//! Ports - traits at the seams between the application core and the
//! outside world.

mod ai_provider;
mod grade_store;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, Message, MessageRole,
};
pub use grade_store::{GradeStore, StoreError};
