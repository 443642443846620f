//! Administrative controller

use super::menu::AdminOption;
use super::view::{format_menu, format_table, View};
use crate::core::database::{Database, StoreError};
use crate::core::models::Student;
use crate::core::reports::{group_by_grade, partition_by_pass};
use crate::info;
use std::fmt::Write;

const MENU: &[(&str, &str)] = &[
    ("c", "clear database: Clear all data"),
    ("g", "group students: Group by grade"),
    ("p", "partition students: Partition PASS/FAIL"),
    ("r", "remove student: Remove by ID"),
    ("s", "show: Show all students"),
    ("x", "exit"),
];

fn student_rows(students: &[&Student]) -> Vec<Vec<String>> {
    students
        .iter()
        .map(|s| vec![s.id.clone(), s.name.clone(), s.email.clone()])
        .collect()
}

fn average_rows(students: &[&Student]) -> Vec<Vec<String>> {
    students
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.name.clone(),
                format!("{:.1}", s.average_mark()),
            ]
        })
        .collect()
}

/// Runs the admin menu and the one-shot admin commands
pub struct AdminController<'a> {
    db: &'a Database,
}

impl<'a> AdminController<'a> {
    /// Create a controller over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Show the menu and handle choices until exit
    ///
    /// # Errors
    /// Propagates store failures
    pub fn run<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        loop {
            view.display(&format_menu("Admin System", MENU));
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
        match AdminOption::parse(choice) {
            AdminOption::Clear => {
                self.clear_database(view)?;
            }
            AdminOption::Group => self.group_students(view)?,
            AdminOption::Partition => self.partition_students(view)?,
            AdminOption::Remove => {
                if let Some(id) = view.get_input("Enter student ID") {
                    self.remove_student(view, &id)?;
                }
            }
            AdminOption::Show => self.show_students(view)?,
            AdminOption::Exit => return Ok(false),
            AdminOption::Invalid => view.display_error("Invalid option"),
        }
        Ok(true)
    }

    /// List every student
    ///
    /// # Errors
    /// Propagates store failures
    pub fn show_students<V: View>(&self, view: &mut V) -> Result<(), StoreError> {
        let students = self.db.load_all()?;
        if students.is_empty() {
            view.display("No students found.");
            return Ok(());
        }
        let refs: Vec<&Student> = students.iter().collect();
        view.display(&format!(
            "\nAll Students\n{}",
            format_table(&["ID", "Name", "Email"], &student_rows(&refs), &[8, 20, 30])
        ));
        Ok(())
    }

    /// Show students grouped by the grades of their subjects
    ///
    /// # Errors
    /// Propagates store failures
    pub fn group_students<V: View>(&self, view: &mut V) -> Result<(), StoreError> {
        let students = self.db.load_all()?;
        if students.is_empty() {
            view.display_error("No students found");
            return Ok(());
        }
        let mut out = String::from("\nStudents Grouped by Grade\n");
        for (grade, members) in &group_by_grade(&students) {
            let _ = writeln!(
                out,
                "\nGrade {grade}:\n{}",
                format_table(&["ID", "Name", "Email"], &student_rows(members), &[8, 20, 30])
            );
        }
        view.display(&out);
        Ok(())
    }

    /// Show students split into passing and failing
    ///
    /// # Errors
    /// Propagates store failures
    pub fn partition_students<V: View>(&self, view: &mut V) -> Result<(), StoreError> {
        let students = self.db.load_all()?;
        if students.is_empty() {
            view.display_error("No students found");
            return Ok(());
        }
        let (passing, failing) = partition_by_pass(&students);
        let headers = ["ID", "Name", "Average Mark"];
        let widths = [8, 20, 12];
        view.display(&format!(
            "\nPassing Students\n{}\nFailing Students:\n{}",
            format_table(&headers, &average_rows(&passing), &widths),
            format_table(&headers, &average_rows(&failing), &widths)
        ));
        Ok(())
    }

    /// Remove the student with `id`
    ///
    /// # Errors
    /// Propagates store failures
    pub fn remove_student<V: View>(&self, view: &mut V, id: &str) -> Result<bool, StoreError> {
        let removed = self.db.remove(id)?;
        if removed {
            view.display_success(&format!("Student {id} removed successfully!"));
        } else {
            view.display_error(&format!("Student {id} not found!"));
        }
        Ok(removed)
    }

    /// Remove every student after confirmation
    ///
    /// # Errors
    /// Propagates store failures
    pub fn clear_database<V: View>(&self, view: &mut V) -> Result<bool, StoreError> {
        if !view.confirm_action("Are you sure you want to clear all data?") {
            view.display_success("Operation cancelled");
            return Ok(false);
        }
        self.db.clear_all()?;
        info!("Student store cleared by admin");
        view.display_success("Database cleared successfully!");
        Ok(true)
    }
}
