//! Command-line interface for imagetag.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigArgs, NamesArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, GlobalOptions, ProjectContext};
