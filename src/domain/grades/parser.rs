//! Parser for the free-text onboarding form.
//!
//! Input is one `subject:grade` pair per line. Parsing is all-or-nothing:
//! a single malformed line fails the whole batch so nothing partial is
//! ever saved.

use thiserror::Error;

use super::SubjectGrades;

/// Errors produced while parsing subject/grade lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeParseError {
    #[error("no subject lines provided")]
    Empty,

    #[error("line {line}: missing ':' separator")]
    MissingSeparator { line: usize },

    #[error("line {line}: grade '{value}' is not a number")]
    InvalidGrade { line: usize, value: String },
}

/// Parses `subject:grade` lines into a [`SubjectGrades`] mapping.
///
/// Each line is split on the first `:`; both sides are trimmed and the
/// grade must parse as a floating-point number. A duplicate subject keeps
/// the last value, matching ordinary map-insert semantics.
pub fn parse_subject_grades(input: &str) -> Result<SubjectGrades, GradeParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GradeParseError::Empty);
    }

    let mut grades = SubjectGrades::new();
    for (idx, line) in input.split('\n').enumerate() {
        let line_no = idx + 1;
        let (subject, grade) = line
            .split_once(':')
            .ok_or(GradeParseError::MissingSeparator { line: line_no })?;
        let grade = grade
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeParseError::InvalidGrade {
                line: line_no,
                value: grade.trim().to_string(),
            })?;
        grades.insert(subject.trim(), grade);
    }
    Ok(grades)
}
