//! Application layer - the flow controller and prompt composition.

pub mod flow;
pub mod prompts;

pub use flow::{FlowController, LoginOutcome};
