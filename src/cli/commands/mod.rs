//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. All commands share [`ProjectContext`] for loading
//! config, building the layered environment and resolving the version.

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod names;
pub mod resolve;

pub use context::{GlobalOptions, ProjectContext};
pub use dispatcher::{Command, CommandDispatcher};
