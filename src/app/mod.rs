//! Menu-driven application layer
//!
//! Controllers turn store results into user-facing messages and drive any
//! front end that implements [`View`].

pub mod admin;
pub mod menu;
pub mod student;
pub mod subject;
pub mod university;
pub mod view;

pub use admin::AdminController;
pub use student::StudentController;
pub use subject::SubjectController;
pub use university::UniversityController;
pub use view::View;
