//! Configuration schema definitions.
//!
//! Maps to `.imagetag/config.yml`. Every field is optional; an empty file
//! (or no file) yields the Logstash defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::naming::NamingScheme;
use crate::version::{VersionKeys, DEFAULT_HELPER, STAGING_BUILD_VAR, VERSION_VAR};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagetagConfig {
    /// Artifact naming.
    pub naming: NamingScheme,

    /// Version resolution settings.
    pub version: VersionSettings,

    /// Env file merged below the process environment (relative to the project root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,

    /// Baseline variables, lowest priority.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// Which variables and helper drive version resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionSettings {
    /// Variable holding the base version.
    pub env_var: String,

    /// Variable holding the staging build number.
    pub staging_env_var: String,

    /// Helper executable (relative paths resolve against the project root).
    pub helper: PathBuf,
}

impl Default for VersionSettings {
    fn default() -> Self {
        Self {
            env_var: VERSION_VAR.to_string(),
            staging_env_var: STAGING_BUILD_VAR.to_string(),
            helper: PathBuf::from(DEFAULT_HELPER),
        }
    }
}

impl VersionSettings {
    /// Variable names for the resolver.
    pub fn keys(&self) -> VersionKeys {
        VersionKeys {
            version: self.env_var.clone(),
            staging_build: self.staging_env_var.clone(),
        }
    }
}
