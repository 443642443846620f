//! Interactive menu command handler

use crate::terminal::TerminalView;
use uni_records::app::UniversityController;
use uni_records::core::database::{Database, StoreError};
use uni_records::info;

/// Run the university menu on the terminal until the user exits
///
/// # Errors
/// Returns the first store failure; the menu stops at that point
pub fn run(db: &Database) -> Result<(), StoreError> {
    info!("Starting interactive menu on {}", db.path().display());
    let mut view = TerminalView::new(false);
    UniversityController::new(db).run(&mut view)
}
