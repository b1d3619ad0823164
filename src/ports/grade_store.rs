//! Grade Store Port - keyed access to persisted grade records.
//!
//! The store behaves like a single document collection: one record per
//! user identifier, looked up and replaced whole. Implementations must
//! keep `upsert` idempotent and must never retry on their own; callers
//! report failures and move on.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::grades::SubjectGrades;

/// Port for reading and writing grade records by user identifier.
#[async_trait]
pub trait GradeStore: Send + Sync {
    /// Looks up the subjects mapping for an identifier.
    ///
    /// `Ok(None)` means no record exists. Failures are returned as
    /// errors; the caller decides whether to treat them as "no data".
    async fn get(&self, id: &UserId) -> Result<Option<SubjectGrades>, StoreError>;

    /// Inserts or fully replaces the subjects mapping for an identifier.
    ///
    /// The stored mapping is always overwritten whole, never merged.
    async fn upsert(&self, id: &UserId, grades: &SubjectGrades) -> Result<(), StoreError>;
}

/// Grade store errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store never came up; the handle was disabled at startup and
    /// every operation reports the original connection error.
    #[error("grade store unavailable: {0}")]
    Disabled(String),

    /// A per-call read or write failed.
    #[error("grade store query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Creates a query error.
    pub fn query(message: impl Into<String>) -> Self {
        StoreError::Query(message.into())
    }
}
