//! Domain layer - value objects and pure logic.

pub mod foundation;
pub mod grades;
pub mod session;
