//! Adapters - concrete implementations of the ports.

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
