//! Subject model

use super::Grade;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest mark produced by [`Subject::random_mark`].
pub const MIN_GENERATED_MARK: u8 = 25;

/// Highest mark produced by [`Subject::random_mark`].
pub const MAX_GENERATED_MARK: u8 = 100;

/// An enrolled subject result
///
/// The grade is computed from the mark when the subject is created. When a
/// subject is read back from storage the stored grade is kept verbatim, so a
/// record whose grade disagrees with its mark round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Three-digit subject identifier (e.g. "042")
    pub id: String,

    /// Numeric mark
    pub mark: f64,

    /// Letter grade for `mark`
    pub grade: Grade,
}

impl Subject {
    /// Create a subject
    ///
    /// # Arguments
    /// * `id` - Subject identifier; a random three-digit id when `None`
    /// * `mark` - Mark; a random mark in `[25, 100]` when `None`
    #[must_use]
    pub fn new(id: Option<String>, mark: Option<f64>) -> Self {
        let id = id.unwrap_or_else(Self::random_id);
        let mark = mark.unwrap_or_else(Self::random_mark);
        Self {
            id,
            mark,
            grade: Grade::classify(mark),
        }
    }

    /// Create a subject with a random id and mark
    #[must_use]
    pub fn generate() -> Self {
        Self::new(None, None)
    }

    /// Random three-digit id in `001..=999`. Collisions are not checked here.
    #[must_use]
    pub fn random_id() -> String {
        format!("{:03}", rand::rng().random_range(1..=999_u32))
    }

    /// Random whole mark in `[25, 100]`
    #[must_use]
    pub fn random_mark() -> f64 {
        f64::from(rand::rng().random_range(MIN_GENERATED_MARK..=MAX_GENERATED_MARK))
    }

    /// Whether the stored grade still matches the mark
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.grade == Grade::classify(self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new(Some("042".to_string()), Some(77.0));

        assert_eq!(subject.id, "042");
        assert!((subject.mark - 77.0).abs() < f64::EPSILON);
        assert_eq!(subject.grade, Grade::D);
        assert!(subject.is_consistent());
    }

    #[test]
    fn test_generated_fields_in_range() {
        for _ in 0..200 {
            let subject = Subject::generate();
            assert_eq!(subject.id.len(), 3);
            assert!(subject.id.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(subject.id, "000");
            assert!((25.0..=100.0).contains(&subject.mark));
            assert_eq!(subject.grade, Grade::classify(subject.mark));
        }
    }

    #[test]
    fn test_caller_mark_drives_grade() {
        let subject = Subject::new(None, Some(49.5));
        assert_eq!(subject.grade, Grade::Z);

        // A zero mark is a real mark, not "missing"
        let zero = Subject::new(None, Some(0.0));
        assert!(zero.mark.abs() < f64::EPSILON);
        assert_eq!(zero.grade, Grade::Z);
    }

    #[test]
    fn test_record_shape() {
        let subject = Subject::new(Some("007".to_string()), Some(90.0));
        let value = serde_json::to_value(&subject).unwrap();

        assert_eq!(value["id"], "007");
        assert_eq!(value["mark"], 90.0);
        assert_eq!(value["grade"], "HD");
    }

    #[test]
    fn test_stored_grade_is_not_recomputed() {
        let raw = r#"{"id":"101","mark":30.0,"grade":"HD"}"#;
        let subject: Subject = serde_json::from_str(raw).unwrap();

        assert_eq!(subject.grade, Grade::HD);
        assert!(!subject.is_consistent());
        assert_eq!(serde_json::to_string(&subject).unwrap(), raw);
    }
}
