//! Config command implementation.
//!
//! The `imagetag config` command shows the effective configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{ImagetagError, Result};
use crate::ui::UserInterface;

use super::context::{GlobalOptions, ProjectContext};
use super::dispatcher::Command;

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let ctx = ProjectContext::load(&self.project_root, &self.options)?;

        match &self.options.config {
            Some(path) => ui.detail(&format!("config: {}", path.display())),
            None => {
                let paths = ConfigPaths::discover(ctx.project_root());
                let existing = paths.all_existing();
                if existing.is_empty() {
                    ui.detail("config: defaults (no .imagetag/config.yml)");
                }
                for path in existing {
                    ui.detail(&format!("config: {}", path.display()));
                }
            }
        }

        let keys = ctx.keys();
        for key in [&keys.version, &keys.staging_build] {
            let line = match (ctx.env().get(key), ctx.env().source_of(key)) {
                (Some(value), Some(source)) => format!("{}={:?} (from {})", key, value, source),
                _ => format!("{} is not set", key),
            };
            ui.detail(&line);
        }
        ui.detail(&format!("helper: {}", ctx.helper().program().display()));

        let rendered = if self.args.json {
            serde_json::to_string_pretty(ctx.config()).map_err(|e| ImagetagError::Other(e.into()))?
        } else {
            serde_yaml::to_string(ctx.config()).map_err(|e| ImagetagError::Other(e.into()))?
        };
        ui.message(rendered.trim_end());

        Ok(())
    }
}
