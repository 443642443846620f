//! Core records functionality: models, persistence, validation, reporting

pub mod config;
pub mod database;
pub mod models;
pub mod reports;
pub mod validation;

/// Returns the current version of the `uni-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
