//! Shared library for `uni-records`
//! Contains the student record store, domain models, and the menu controllers
//! used by the `unirecords` CLI.

pub mod app;
pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
