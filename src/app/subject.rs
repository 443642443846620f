//! Subject enrolment controller for a logged-in student

use super::menu::SubjectOption;
use super::view::{format_menu, format_table, View};
use crate::core::database::{Database, StoreError};
use crate::core::models::{Student, MAX_SUBJECTS};
use crate::core::validation::is_valid_password;
use crate::{info, warn};

const MENU: &[(&str, &str)] = &[
    ("c", "change: Change password"),
    ("e", "enrol: Enrol in a subject"),
    ("r", "remove: Remove a subject"),
    ("s", "show: Show enrolled subjects"),
    ("x", "exit"),
];

/// Runs the subject menu on behalf of one student
pub struct SubjectController<'a> {
    db: &'a Database,
    student: Student,
}

impl<'a> SubjectController<'a> {
    /// Create a controller for `student`
    #[must_use]
    pub const fn new(db: &'a Database, student: Student) -> Self {
        Self { db, student }
    }

    /// The student as last saved by this controller
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// Show the menu and handle choices until the student exits
    ///
    /// # Errors
    /// Propagates store failures
    pub fn run<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        loop {
            view.display(&format_menu("Subject Enrolment System", MENU));
            let Some(choice) = view.get_input("Enter your choice") else {
                return Ok(());
            };
            if !self.handle_choice(view, &choice)? {
                return Ok(());
            }
        }
    }

    /// Handle one menu choice. Returns `false` on exit.
    ///
    /// # Errors
    /// Propagates store failures
    pub fn handle_choice<V: View>(
        &mut self,
        view: &mut V,
        choice: &str,
    ) -> Result<bool, StoreError> {
        match SubjectOption::parse(choice) {
            SubjectOption::ChangePassword => self.change_password(view)?,
            SubjectOption::Enrol => self.enrol_subject(view)?,
            SubjectOption::Remove => self.remove_subject(view)?,
            SubjectOption::Show => self.show_subjects(view),
            SubjectOption::Exit => return Ok(false),
            SubjectOption::Invalid => view.display_error("Invalid option"),
        }
        Ok(true)
    }

    /// Enrol in a freshly generated subject
    ///
    /// # Errors
    /// Propagates store failures
    pub fn enrol_subject<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        let Some(subject) = self.student.enrol_generated().cloned() else {
            view.display_error(&format!(
                "Maximum subjects ({MAX_SUBJECTS}) already enrolled!"
            ));
            return Ok(());
        };
        self.persist()?;
        info!("Student {} enrolled in subject {}", self.student.id, subject.id);
        view.display(&format!(
            "Successfully enrolled in subject {}\nMark: {:.1}\nGrade: {}",
            subject.id, subject.mark, subject.grade
        ));
        Ok(())
    }

    /// Remove a subject chosen by id
    ///
    /// # Errors
    /// Propagates store failures
    pub fn remove_subject<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        let Some(subject_id) = view.get_input("Enter subject ID to remove") else {
            return Ok(());
        };
        if self.student.remove_subject(&subject_id) {
            self.persist()?;
            view.display_success(&format!("Subject {subject_id} removed successfully!"));
        } else {
            view.display_error(&format!("Subject {subject_id} not found!"));
        }
        Ok(())
    }

    /// Change the student's password after validating the new one
    ///
    /// # Errors
    /// Propagates store failures
    pub fn change_password<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        let Some(password) = view.get_input("Enter new password") else {
            return Ok(());
        };
        if !is_valid_password(&password) {
            view.display_error("Invalid password format!");
            return Ok(());
        }
        self.student.password = password;
        if self.persist()? {
            view.display_success("Password changed successfully!");
        } else {
            view.display_error("Failed to change password!");
        }
        Ok(())
    }

    /// Show enrolled subjects and the average mark
    pub fn show_subjects<V: View>(&self, view: &mut V) {
        if self.student.subjects.is_empty() {
            view.display("No subjects enrolled.");
            return;
        }
        let rows: Vec<Vec<String>> = self
            .student
            .subjects
            .iter()
            .map(|s| vec![s.id.clone(), format!("{:.1}", s.mark), s.grade.to_string()])
            .collect();
        view.display(&format!(
            "\nEnrolled Subjects\n{}\nAverage Mark: {:.1}",
            format_table(&["ID", "Mark", "Grade"], &rows, &[6, 6, 5]),
            self.student.average_mark()
        ));
    }

    fn persist(&self) -> Result<bool, StoreError> {
        let saved = self.db.update(&self.student)?;
        if !saved {
            warn!(
                "Student {} is no longer in the store; change not saved",
                self.student.id
            );
        }
        Ok(saved)
    }
}
