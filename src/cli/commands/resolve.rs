//! Resolve command implementation.
//!
//! The `imagetag resolve` command prints the resolved version.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::error::{ImagetagError, Result};
use crate::ui::UserInterface;

use super::context::{GlobalOptions, ProjectContext};
use super::dispatcher::Command;

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let ctx = ProjectContext::load(&self.project_root, &self.options)?;
        let version = ctx.resolve_version()?;
        ctx.explain(&version, ui);

        if self.args.json {
            let json = serde_json::to_string_pretty(&version)
                .map_err(|e| ImagetagError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.base {
            ui.message(version.base());
        } else {
            ui.message(version.full());
        }

        if version.base().is_empty() {
            ui.warning("Resolved base version is empty");
        }

        Ok(())
    }
}
