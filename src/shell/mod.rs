//! Program execution for the version helper.

pub mod command;

pub use command::{execute, CommandResult};
