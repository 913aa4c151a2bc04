//! Names command implementation.
//!
//! The `imagetag names` command prints the display name, image reference
//! and container name for the resolved version.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::NamesArgs;
use crate::error::{ImagetagError, Result};
use crate::naming::{env_line, ArtifactNames};
use crate::ui::UserInterface;
use crate::version::ResolvedVersion;

use super::context::{GlobalOptions, ProjectContext};
use super::dispatcher::Command;

/// JSON shape for `names --json`.
#[derive(Serialize)]
struct NamesReport<'a> {
    version: &'a ResolvedVersion,
    #[serde(flatten)]
    names: &'a ArtifactNames,
}

/// The names command implementation.
pub struct NamesCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: NamesArgs,
}

impl NamesCommand {
    /// Create a new names command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: NamesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for NamesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let ctx = ProjectContext::load(&self.project_root, &self.options)?;
        let version = ctx.resolve_version()?;
        ctx.explain(&version, ui);
        let names = ctx.derive_names(&version);

        if self.args.json {
            let report = NamesReport {
                version: &version,
                names: &names,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| ImagetagError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.shell {
            ui.message(&env_line(&self.args.prefix, "VERSION", version.full()));
            for line in names.to_env_lines(&self.args.prefix) {
                ui.message(&line);
            }
        } else {
            ui.message(&format!("display name:    {}", names.display_name));
            ui.message(&format!("image:           {}", names.image_reference));
            ui.message(&format!("container name:  {}", names.container_name));
        }

        Ok(())
    }
}
