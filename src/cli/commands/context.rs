//! Shared setup for commands: config, layered environment and helper.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{build_env_stack, load_config, EnvLayerStack, EnvSources, ImagetagConfig};
use crate::error::Result;
use crate::naming::ArtifactNames;
use crate::ui::UserInterface;
use crate::version::{CommandHelper, ResolvedVersion, VersionKeys};

/// Global options that shape how a project is loaded.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Explicit env file.
    pub env_file: Option<PathBuf>,
    /// `KEY=VALUE` overrides.
    pub overrides: Vec<String>,
    /// Helper path overriding the configured one.
    pub helper: Option<PathBuf>,
    /// Whether the process environment participates.
    pub inherit_process: bool,
}

/// Everything a command needs to resolve versions for one project.
#[derive(Debug)]
pub struct ProjectContext {
    project_root: PathBuf,
    config: ImagetagConfig,
    env: EnvLayerStack,
    helper: CommandHelper,
}

impl ProjectContext {
    /// Load config and build the layered environment for `project_root`.
    pub fn load(project_root: &Path, options: &GlobalOptions) -> Result<Self> {
        let config = load_config(project_root, options.config.as_deref())?;

        let sources = EnvSources {
            env_file: options.env_file.clone(),
            overrides: options.overrides.clone(),
            inherit_process: options.inherit_process,
        };
        let env = build_env_stack(&config, project_root, &sources)?;

        let helper_path = options
            .helper
            .clone()
            .unwrap_or_else(|| config.version.helper.clone());
        let helper = CommandHelper::for_project(project_root, &helper_path);

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            env,
            helper,
        })
    }

    /// The project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The effective configuration.
    pub fn config(&self) -> &ImagetagConfig {
        &self.config
    }

    /// The layered environment.
    pub fn env(&self) -> &EnvLayerStack {
        &self.env
    }

    /// The helper that runs when the version variable is unset.
    pub fn helper(&self) -> &CommandHelper {
        &self.helper
    }

    /// Variable names in effect.
    pub fn keys(&self) -> VersionKeys {
        self.config.version.keys()
    }

    /// Resolve the version from the flattened environment.
    pub fn resolve_version(&self) -> Result<ResolvedVersion> {
        let env: HashMap<String, String> = self.env.resolve();
        ResolvedVersion::resolve_with_keys(&env, &self.helper, &self.keys())
    }

    /// Derive artifact names with the configured scheme.
    pub fn derive_names(&self, version: &ResolvedVersion) -> ArtifactNames {
        self.config.naming.derive(version)
    }

    /// Report where the version and suffix came from (verbose only).
    pub fn explain(&self, version: &ResolvedVersion, ui: &mut dyn UserInterface) {
        let keys = self.keys();
        ui.detail(&format!("base version from {}", version.source()));
        match self.env.source_of(&keys.staging_build) {
            Some(source) if version.build_suffix().is_some() => ui.detail(&format!(
                "staging build from {} ({})",
                keys.staging_build, source
            )),
            Some(source) => ui.detail(&format!(
                "{} is empty in {}, no suffix applied",
                keys.staging_build, source
            )),
            None => ui.detail(&format!("{} not set, no suffix applied", keys.staging_build)),
        }
    }
}
