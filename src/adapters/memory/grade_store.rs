//! In-memory implementation of the GradeStore port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::grades::SubjectGrades;
use crate::ports::{GradeStore, StoreError};

/// In-memory grade store keyed by user identifier.
///
/// Mirrors the durable store's contract: whole-mapping replacement on
/// every upsert, idempotent under repeated identical calls.
#[derive(Debug, Default)]
pub struct InMemoryGradeStore {
    records: Mutex<HashMap<String, SubjectGrades>>,
}

impl InMemoryGradeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, for test assertions.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GradeStore for InMemoryGradeStore {
    async fn get(&self, id: &UserId) -> Result<Option<SubjectGrades>, StoreError> {
        Ok(self.records.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn upsert(&self, id: &UserId, grades: &SubjectGrades) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(id.as_str().to_string(), grades.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn grades(pairs: &[(&str, f64)]) -> SubjectGrades {
        pairs
            .iter()
            .map(|(s, g)| (s.to_string(), *g))
            .collect()
    }

    #[tokio::test]
    async fn get_of_absent_record_is_none() {
        let store = InMemoryGradeStore::new();
        assert_eq!(store.get(&user("u1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_then_get_roundtrips() {
        let store = InMemoryGradeStore::new();
        let g = grades(&[("Math", 85.0), ("Science", 42.0)]);

        store.upsert(&user("u1"), &g).await.unwrap();
        assert_eq!(store.get(&user("u1")).await.unwrap(), Some(g));
    }

    #[tokio::test]
    async fn repeated_identical_upsert_is_idempotent() {
        let store = InMemoryGradeStore::new();
        let g = grades(&[("Math", 85.0)]);

        store.upsert(&user("u1"), &g).await.unwrap();
        store.upsert(&user("u1"), &g).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&user("u1")).await.unwrap(), Some(g));
    }

    #[tokio::test]
    async fn resave_replaces_the_whole_mapping() {
        let store = InMemoryGradeStore::new();
        store
            .upsert(&user("u1"), &grades(&[("Math", 85.0), ("Eng", 60.0)]))
            .await
            .unwrap();
        store
            .upsert(&user("u1"), &grades(&[("Science", 42.0)]))
            .await
            .unwrap();

        // The old subjects are gone, not merged.
        assert_eq!(
            store.get(&user("u1")).await.unwrap(),
            Some(grades(&[("Science", 42.0)]))
        );
    }
}
