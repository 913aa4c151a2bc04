//! Assembling the resolver's environment.
//!
//! Layers, lowest priority first:
//! 1. `env:` from the config file
//! 2. The env file (`--env-file`, else `env_file:` from config)
//! 3. The process environment
//! 4. `--set KEY=VALUE` overrides

use std::path::{Path, PathBuf};

use crate::config::env_file::EnvFileParser;
use crate::config::env_layer::{EnvLayer, EnvLayerStack};
use crate::config::schema::ImagetagConfig;
use crate::error::Result;

/// Inputs for building the layered environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSources {
    /// Env file given on the command line; must exist.
    pub env_file: Option<PathBuf>,
    /// Raw `KEY=VALUE` overrides.
    pub overrides: Vec<String>,
    /// Include the process environment layer.
    pub inherit_process: bool,
}

/// Build the layered environment for a project.
///
/// An env file named in the config is optional; one passed explicitly
/// through [`EnvSources::env_file`] must exist.
pub fn build_env_stack(
    config: &ImagetagConfig,
    project_root: &Path,
    sources: &EnvSources,
) -> Result<EnvLayerStack> {
    let mut stack = EnvLayerStack::new();

    if !config.env.is_empty() {
        let mut layer = EnvLayer::new("config");
        for (key, value) in &config.env {
            layer.set(key.as_str(), value.as_str());
        }
        stack.push(layer);
    }

    if let Some(path) = &sources.env_file {
        stack.push(EnvLayer::from_map(
            path.display().to_string(),
            EnvFileParser::load(path)?,
        ));
    } else if let Some(configured) = &config.env_file {
        let path = project_root.join(configured);
        let vars = EnvFileParser::load_optional(&path)?;
        if vars.is_empty() {
            tracing::debug!(path = %path.display(), "configured env file missing or empty");
        } else {
            stack.push(EnvLayer::from_map(path.display().to_string(), vars));
        }
    }

    if sources.inherit_process {
        let keys = config.version.keys();
        stack.push(EnvLayer::from_process(&[
            keys.version.as_str(),
            keys.staging_build.as_str(),
        ])?);
    }

    if !sources.overrides.is_empty() {
        stack.push(EnvLayer::from_overrides("--set", &sources.overrides)?);
    }

    Ok(stack)
}
