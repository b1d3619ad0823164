//! The subject -> grade mapping value object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered mapping from subject name to grade.
///
/// Serializes as a plain JSON object, matching the `subjects` field of a
/// stored grade record. Saves always replace the whole mapping, so there
/// is no merge operation here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectGrades(BTreeMap<String, f64>);

impl SubjectGrades {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a grade, replacing any previous value for the subject.
    pub fn insert(&mut self, subject: impl Into<String>, grade: f64) {
        self.0.insert(subject.into(), grade);
    }

    /// Returns the grade for a subject, if present.
    pub fn get(&self, subject: &str) -> Option<f64> {
        self.0.get(subject).copied()
    }

    /// Returns true when no subjects are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded subjects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Arithmetic mean of all grades; 0.0 for an empty mapping.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.values().sum::<f64>() / self.0.len() as f64
    }

    /// Iterates over (subject, grade) pairs in subject order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for SubjectGrades {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
