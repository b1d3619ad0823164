//! Grade domain - the subject/grade mapping, its parser, and the
//! response-style classifier.

mod parser;
mod response_style;
mod subject_grades;

pub use parser::{parse_subject_grades, GradeParseError};
pub use response_style::ResponseStyle;
pub use subject_grades::SubjectGrades;
