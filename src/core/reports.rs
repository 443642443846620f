//! Administrative views over the student collection

use crate::core::models::{Grade, Student};
use std::collections::BTreeMap;

/// Students bucketed by grade, lowest grade first
pub type GradeGroups<'a> = BTreeMap<Grade, Vec<&'a Student>>;

/// Bucket students by the grades of their subjects
///
/// A student is listed under the grade of every subject they hold, once per
/// subject. Students without subjects do not appear.
#[must_use]
pub fn group_by_grade(students: &[Student]) -> GradeGroups<'_> {
    let mut groups = GradeGroups::new();
    for student in students {
        for subject in &student.subjects {
            groups.entry(subject.grade.clone()).or_default().push(student);
        }
    }
    groups
}

/// Split students into `(passing, failing)` by average mark, keeping order
#[must_use]
pub fn partition_by_pass(students: &[Student]) -> (Vec<&Student>, Vec<&Student>) {
    students.iter().partition(|s| s.is_passing())
}
