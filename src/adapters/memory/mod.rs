//! In-memory adapters, used by tests and store-less development runs.

mod grade_store;

pub use grade_store::InMemoryGradeStore;
