//! Student model

use super::Subject;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of subjects a student may hold at once
pub const MAX_SUBJECTS: usize = 4;

/// Average mark at or above which a student is passing
pub const PASS_MARK: f64 = 50.0;

/// A registered student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Six-digit student identifier, the key for update and removal
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address, unique across the store
    pub email: String,

    /// Plaintext password
    pub password: String,

    /// Enrolled subjects in enrolment order
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Student {
    /// Create a new student with a random id and no subjects
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address
    /// * `password` - Plaintext password
    #[must_use]
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            id: Self::random_id(),
            name,
            email,
            password,
            subjects: Vec::new(),
        }
    }

    /// Random six-digit id in `000001..=999999`. Collisions are not checked here.
    #[must_use]
    pub fn random_id() -> String {
        format!("{:06}", rand::rng().random_range(1..=999_999_u32))
    }

    /// Whether another subject can be enrolled
    #[must_use]
    pub fn can_enrol(&self) -> bool {
        self.subjects.len() < MAX_SUBJECTS
    }

    /// Enrol in a subject
    ///
    /// # Returns
    /// `false` (and no change) when already holding [`MAX_SUBJECTS`] subjects
    pub fn enrol(&mut self, subject: Subject) -> bool {
        if !self.can_enrol() {
            return false;
        }
        self.subjects.push(subject);
        true
    }

    /// Enrol in a freshly generated subject whose id this student does not already hold
    ///
    /// # Returns
    /// The new subject, or `None` when at capacity
    pub fn enrol_generated(&mut self) -> Option<&Subject> {
        if !self.can_enrol() {
            return None;
        }
        let mut subject = Subject::generate();
        while self.subjects.iter().any(|s| s.id == subject.id) {
            subject.id = Subject::random_id();
        }
        self.subjects.push(subject);
        self.subjects.last()
    }

    /// Remove every subject with the given id
    ///
    /// # Returns
    /// `true` if at least one subject was removed
    pub fn remove_subject(&mut self, subject_id: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != subject_id);
        self.subjects.len() < before
    }

    /// Mean mark across enrolled subjects, `0.0` with none
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_mark(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        let total: f64 = self.subjects.iter().map(|s| s.mark).sum();
        total / self.subjects.len() as f64
    }

    /// Whether the average mark reaches [`PASS_MARK`]
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.average_mark() >= PASS_MARK
    }

    /// Find an enrolled subject by id
    #[must_use]
    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }
}
