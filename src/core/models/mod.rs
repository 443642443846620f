//! Data models for `uni-records`

pub mod grade;
pub mod student;
pub mod subject;

pub use grade::Grade;
pub use student::{Student, MAX_SUBJECTS, PASS_MARK};
pub use subject::Subject;
