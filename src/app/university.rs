//! Top-level menu controller

use super::admin::AdminController;
use super::menu::UniversityOption;
use super::student::StudentController;
use super::view::{format_menu, View};
use crate::core::database::{Database, StoreError};

const MENU: &[(&str, &str)] = &[("A", "Admin"), ("S", "Student"), ("X", "Exit")];

/// Entry controller that dispatches to the admin and student systems
pub struct UniversityController<'a> {
    db: &'a Database,
}

impl<'a> UniversityController<'a> {
    /// Create a controller over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Show the menu and handle choices until exit or end of input
    ///
    /// # Errors
    /// Propagates store failures from any sub-menu
    pub fn run<V: View>(&mut self, view: &mut V) -> Result<(), StoreError> {
        loop {
            view.display(&format_menu("Welcome to the University System", MENU));
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
    /// Propagates store failures from any sub-menu
    pub fn handle_choice<V: View>(
        &mut self,
        view: &mut V,
        choice: &str,
    ) -> Result<bool, StoreError> {
        match UniversityOption::parse(choice) {
            UniversityOption::Admin => AdminController::new(self.db).run(view)?,
            UniversityOption::Student => StudentController::new(self.db).run(view)?,
            UniversityOption::Exit => {
                view.display_success("Goodbye!");
                return Ok(false);
            }
            UniversityOption::Invalid => view.display_error("Invalid option"),
        }
        Ok(true)
    }
}
