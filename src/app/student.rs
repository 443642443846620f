//! Student registration and login controller

use super::menu::StudentOption;
use super::subject::SubjectController;
use super::view::{format_menu, View};
use crate::core::database::{Database, StoreError};
use crate::core::models::Student;
use crate::core::validation::{is_valid_email, is_valid_password};
use crate::info;

const MENU: &[(&str, &str)] = &[("l", "login"), ("r", "register"), ("x", "exit")];

/// Runs the student system menu
pub struct StudentController<'a> {
    db: &'a Database,
}

impl<'a> StudentController<'a> {
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
            view.display(&format_menu("Student System", MENU));
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
        match StudentOption::parse(choice) {
            StudentOption::Login => self.login(view)?,
            StudentOption::Register => {
                self.register(view)?;
            }
            StudentOption::Exit => return Ok(false),
            StudentOption::Invalid => view.display_error("Invalid option"),
        }
        Ok(true)
    }

    /// Read a registration form and add the student
    ///
    /// # Returns
    /// The stored student on success
    ///
    /// # Errors
    /// Propagates store failures
    pub fn register<V: View>(&mut self, view: &mut V) -> Result<Option<Student>, StoreError> {
        view.display("\nStudent Registration");
        let (Some(name), Some(email), Some(password)) = (
            view.get_input("Enter name"),
            view.get_input("Enter email"),
            view.get_input("Enter password"),
        ) else {
            return Ok(None);
        };

        if !is_valid_email(&email) {
            view.display_error("Invalid email format. Must end with @university.com");
            return Ok(None);
        }
        if !is_valid_password(&password) {
            view.display_error(
                "Invalid password format. Must start with uppercase, \
                 contain at least 5 letters followed by 3+ digits",
            );
            return Ok(None);
        }

        let mut student = Student::new(name, email, password);
        if self.db.add(&mut student)? {
            info!("Registered student {} <{}>", student.id, student.email);
            view.display_success("Registration successful!");
            Ok(Some(student))
        } else {
            view.display_error("Student already exists!");
            Ok(None)
        }
    }

    /// Read credentials and, on success, run the subject menu for that student
    ///
    /// # Errors
    /// Propagates store failures
    pub fn login<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        view.display("\nStudent Login");
        let (Some(email), Some(password)) =
            (view.get_input("Enter email"), view.get_input("Enter password"))
        else {
            return Ok(());
        };

        match self.db.find_by_email(&email)? {
            Some(student) if student.password == password => {
                info!("Student {} logged in", student.id);
                view.display_success("Login successful!");
                SubjectController::new(self.db, student).run(view)
            }
            _ => {
                view.display_error("Invalid credentials!");
                Ok(())
            }
        }
    }
}
