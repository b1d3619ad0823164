//! Response-style tiers derived from the grade average.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SubjectGrades;

/// Tone tier for assistant answers, selected from the mean grade.
///
/// Never persisted; recomputed from the held grades on every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseStyle {
    Standard,
    Simplified,
    VerySimplified,
}

impl ResponseStyle {
    /// Classifies a grade mapping into a tier.
    ///
    /// mean >= 80 is standard, 40 <= mean < 80 is simplified, anything
    /// below is very-simplified. An empty mapping counts as mean 0.
    pub fn classify(grades: &SubjectGrades) -> Self {
        let mean = grades.mean();
        if mean >= 80.0 {
            ResponseStyle::Standard
        } else if mean >= 40.0 {
            ResponseStyle::Simplified
        } else {
            ResponseStyle::VerySimplified
        }
    }

    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStyle::Standard => "standard",
            ResponseStyle::Simplified => "simplified",
            ResponseStyle::VerySimplified => "very-simplified",
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grades(pairs: &[(&str, f64)]) -> SubjectGrades {
        pairs
            .iter()
            .map(|(s, g)| (s.to_string(), *g))
            .collect()
    }

    #[test]
    fn mean_at_or_above_80_is_standard() {
        assert_eq!(
            ResponseStyle::classify(&grades(&[("Math", 80.0)])),
            ResponseStyle::Standard
        );
        assert_eq!(
            ResponseStyle::classify(&grades(&[("Math", 90.0), ("Eng", 100.0)])),
            ResponseStyle::Standard
        );
    }

    #[test]
    fn mean_between_40_and_80_is_simplified() {
        assert_eq!(
            ResponseStyle::classify(&grades(&[("Math", 40.0)])),
            ResponseStyle::Simplified
        );
        assert_eq!(
            ResponseStyle::classify(&grades(&[("Math", 79.9)])),
            ResponseStyle::Simplified
        );
    }

    #[test]
    fn mean_below_40_is_very_simplified() {
        assert_eq!(
            ResponseStyle::classify(&grades(&[("Math", 30.0), ("Eng", 35.0)])),
            ResponseStyle::VerySimplified
        );
    }

    #[test]
    fn empty_mapping_counts_as_zero_mean() {
        assert_eq!(
            ResponseStyle::classify(&SubjectGrades::new()),
            ResponseStyle::VerySimplified
        );
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ResponseStyle::VerySimplified).unwrap(),
            "\"very-simplified\""
        );
        assert_eq!(ResponseStyle::Simplified.as_str(), "simplified");
    }

    proptest! {
        // A single grade equals the mean, so this exercises the tier
        // boundaries across the whole plausible grade range.
        #[test]
        fn tiers_partition_the_grade_range(grade in 0.0f64..=120.0) {
            let style = ResponseStyle::classify(&grades(&[("Only", grade)]));
            if grade >= 80.0 {
                prop_assert_eq!(style, ResponseStyle::Standard);
            } else if grade >= 40.0 {
                prop_assert_eq!(style, ResponseStyle::Simplified);
            } else {
                prop_assert_eq!(style, ResponseStyle::VerySimplified);
            }
        }
    }
}
