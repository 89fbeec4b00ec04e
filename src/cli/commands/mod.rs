//! CLI command handlers for `courseplan`.
//!
//! Each command group is implemented in its own submodule.

pub mod config;
pub mod plan;
pub mod report;
