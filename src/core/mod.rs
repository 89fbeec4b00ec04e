//! Core planning functionality shared by the library and the CLI

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod report;
pub mod seed;
pub mod store;

/// Returns the current version of the `course-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
