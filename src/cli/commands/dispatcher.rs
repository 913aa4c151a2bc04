//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, NamesArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::GlobalOptions;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    options: GlobalOptions,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, options: GlobalOptions) -> Self {
        Self {
            project_root,
            options,
        }
    }

    /// Build global options from parsed CLI flags.
    pub fn options_from_cli(cli: &Cli) -> GlobalOptions {
        GlobalOptions {
            config: cli.config.clone(),
            env_file: cli.env_file.clone(),
            overrides: cli.set.clone(),
            helper: cli.helper.clone(),
            inherit_process: true,
        }
    }

    /// Dispatch and execute a command. `names` runs when none is given.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(
                    &self.project_root,
                    self.options.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Names(args)) => {
                let cmd = super::names::NamesCommand::new(
                    &self.project_root,
                    self.options.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.project_root,
                    self.options.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            None => {
                let cmd = super::names::NamesCommand::new(
                    &self.project_root,
                    self.options.clone(),
                    NamesArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
