//! One-shot administrative commands over the student store

use crate::args::StudentsSubcommand;
use crate::terminal::TerminalView;
use uni_records::app::AdminController;
use uni_records::core::database::{Database, StoreError};

/// Dispatch a students subcommand
///
/// # Returns
/// `false` when the command ran but did not do what was asked (unknown id,
/// cancelled clear), so the caller can set a failing exit status
///
/// # Errors
/// Propagates store failures
pub fn run(subcommand: StudentsSubcommand, db: &Database) -> Result<bool, StoreError> {
    let assume_yes = matches!(subcommand, StudentsSubcommand::Clear { yes: true });
    let mut view = TerminalView::new(assume_yes);
    let admin = AdminController::new(db);

    match subcommand {
        StudentsSubcommand::List => admin.show_students(&mut view).map(|()| true),
        StudentsSubcommand::Group => admin.group_students(&mut view).map(|()| true),
        StudentsSubcommand::Partition => admin.partition_students(&mut view).map(|()| true),
        StudentsSubcommand::Remove { id } => admin.remove_student(&mut view, &id),
        StudentsSubcommand::Clear { .. } => admin.clear_database(&mut view),
    }
}
