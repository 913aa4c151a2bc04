//! Version resolution.
//!
//! Resolves the effective version using the priority chain:
//! 1. The version variable in the supplied environment (presence only)
//! 2. The version helper's trimmed output
//!
//! A staging build number is then appended as `-<suffix>` when its variable
//! is set to a non-empty value.

use std::collections::HashMap;

use serde::Serialize;

use super::helper::VersionHelper;
use crate::error::Result;

/// Default name of the variable holding the base version.
pub const VERSION_VAR: &str = "ELASTIC_VERSION";

/// Default name of the variable holding the staging build number.
pub const STAGING_BUILD_VAR: &str = "STAGING_BUILD_NUM";

/// Names of the variables consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKeys {
    /// Variable holding the base version.
    pub version: String,
    /// Variable holding the staging build number.
    pub staging_build: String,
}

impl Default for VersionKeys {
    fn default() -> Self {
        Self {
            version: VERSION_VAR.to_string(),
            staging_build: STAGING_BUILD_VAR.to_string(),
        }
    }
}

/// How the base version was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum VersionSource {
    /// Read from the named environment variable.
    Environment(String),
    /// Reported by the named helper.
    Helper(String),
}

impl std::fmt::Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment(var) => write!(f, "environment variable {}", var),
            Self::Helper(name) => write!(f, "helper {}", name),
        }
    }
}

/// A resolved version: base, optional staging suffix, and the combined form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    base: String,
    build_suffix: Option<String>,
    full: String,
    source: VersionSource,
}

impl ResolvedVersion {
    /// Build a resolved version from its parts.
    ///
    /// An empty suffix is treated as no suffix.
    pub fn new(base: impl Into<String>, build_suffix: Option<String>, source: VersionSource) -> Self {
        let base = base.into();
        let build_suffix = build_suffix.filter(|s| !s.is_empty());
        let full = match &build_suffix {
            Some(suffix) => format!("{}-{}", base, suffix),
            None => base.clone(),
        };
        Self {
            base,
            build_suffix,
            full,
            source,
        }
    }

    /// Resolve using the default variable names.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use imagetag::version::{ResolvedVersion, VersionSource};
    ///
    /// let mut env = HashMap::new();
    /// env.insert("ELASTIC_VERSION".to_string(), "5.3.0".to_string());
    /// env.insert("STAGING_BUILD_NUM".to_string(), "d5b30bd7".to_string());
    ///
    /// let helper = || -> imagetag::Result<String> { unreachable!() };
    /// let resolved = ResolvedVersion::resolve(&env, &helper).unwrap();
    ///
    /// assert_eq!(resolved.base(), "5.3.0");
    /// assert_eq!(resolved.full(), "5.3.0-d5b30bd7");
    /// assert_eq!(
    ///     resolved.source(),
    ///     &VersionSource::Environment("ELASTIC_VERSION".to_string())
    /// );
    /// ```
    pub fn resolve<H>(env: &HashMap<String, String>, helper: &H) -> Result<Self>
    where
        H: VersionHelper + ?Sized,
    {
        Self::resolve_with_keys(env, helper, &VersionKeys::default())
    }

    /// Resolve using custom variable names.
    ///
    /// The helper is invoked at most once, and only when the version
    /// variable is absent. Its errors are returned unchanged.
    pub fn resolve_with_keys<H>(
        env: &HashMap<String, String>,
        helper: &H,
        keys: &VersionKeys,
    ) -> Result<Self>
    where
        H: VersionHelper + ?Sized,
    {
        // 1. Version variable: presence wins, even when empty
        let (base, source) = match env.get(&keys.version) {
            Some(value) => {
                tracing::debug!(var = %keys.version, version = %value, "version from environment");
                (
                    value.clone(),
                    VersionSource::Environment(keys.version.clone()),
                )
            }
            // 2. Helper output
            None => {
                let name = helper.describe();
                tracing::debug!(helper = %name, "{} not set, asking helper", keys.version);
                let reported = helper.report_version()?;
                (reported.trim().to_string(), VersionSource::Helper(name))
            }
        };

        // 3. Staging suffix: only a non-empty value counts
        let build_suffix = env
            .get(&keys.staging_build)
            .filter(|s| !s.is_empty())
            .cloned();
        if let Some(suffix) = &build_suffix {
            tracing::debug!(var = %keys.staging_build, suffix = %suffix, "staging build suffix");
        }

        Ok(Self::new(base, build_suffix, source))
    }

    /// The version without any staging suffix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The staging build number, if one applies.
    pub fn build_suffix(&self) -> Option<&str> {
        self.build_suffix.as_deref()
    }

    /// `base`, or `base-suffix` when a staging build number applies.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Where the base version came from.
    pub fn source(&self) -> &VersionSource {
        &self.source
    }
}

impl std::fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}
