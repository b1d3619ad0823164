//! PostgreSQL adapters.

mod grade_store;

pub use grade_store::PostgresGradeStore;
