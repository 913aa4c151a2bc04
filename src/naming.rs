//! Artifact naming.
//!
//! Derives the display name, image reference and container name a harness
//! uses for a resolved version. These functions only compose strings; they
//! never pull images or talk to a registry.

use serde::{Deserialize, Serialize};

use crate::version::ResolvedVersion;

/// Default product name shown in display strings.
pub const DEFAULT_PRODUCT: &str = "logstash";

/// Default image repository (registry host and path, without tag).
pub const DEFAULT_REPOSITORY: &str = "docker.elastic.co/logstash/logstash";

/// Default container name.
pub const DEFAULT_CONTAINER_NAME: &str = "logstash";

/// Names derived from a resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    /// Human-readable name, e.g. `logstash 5.3.0`. Never carries the staging suffix.
    pub display_name: String,
    /// Fully qualified image reference, e.g. `docker.elastic.co/logstash/logstash:5.3.0-d5b30bd7`.
    pub image_reference: String,
    /// Container name.
    pub container_name: String,
}

impl ArtifactNames {
    /// Render as `KEY=value` lines suitable for `eval` or a CI env file.
    ///
    /// Values are single-quoted when they contain anything outside a safe set.
    pub fn to_env_lines(&self, prefix: &str) -> Vec<String> {
        vec![
            env_line(prefix, "DISPLAY_NAME", &self.display_name),
            env_line(prefix, "IMAGE", &self.image_reference),
            env_line(prefix, "CONTAINER_NAME", &self.container_name),
        ]
    }
}

/// Build one `PREFIX_KEY=value` line with the value shell-quoted as needed.
pub fn env_line(prefix: &str, key: &str, value: &str) -> String {
    format!("{}{}={}", prefix, key, shell_quote(value))
}

fn shell_quote(s: &str) -> String {
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=./:@+".contains(c))
    {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}

/// How artifact names are composed.
///
/// The defaults reproduce the Logstash harness names exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingScheme {
    /// Product name used in the display name.
    pub product: String,
    /// Image repository, without tag.
    pub repository: String,
    /// Container name.
    pub container_name: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            product: DEFAULT_PRODUCT.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }
}

impl NamingScheme {
    /// Derive names for a resolved version.
    ///
    /// The display name uses the base version only; the image tag uses the
    /// full version including any staging suffix.
    pub fn derive(&self, version: &ResolvedVersion) -> ArtifactNames {
        ArtifactNames {
            display_name: format!("{} {}", self.product, version.base()),
            image_reference: format!("{}:{}", self.repository, version.full()),
            container_name: self.container_name.clone(),
        }
    }
}

/// Derive names with the default scheme.
///
/// # Example
///
/// ```
/// use imagetag::naming::derive_names;
/// use imagetag::version::{ResolvedVersion, VersionSource};
///
/// let version = ResolvedVersion::new(
///     "5.3.0",
///     Some("d5b30bd7".to_string()),
///     VersionSource::Environment("ELASTIC_VERSION".to_string()),
/// );
/// let names = derive_names(&version);
///
/// assert_eq!(names.display_name, "logstash 5.3.0");
/// assert_eq!(names.image_reference, "docker.elastic.co/logstash/logstash:5.3.0-d5b30bd7");
/// assert_eq!(names.container_name, "logstash");
/// ```
pub fn derive_names(version: &ResolvedVersion) -> ArtifactNames {
    NamingScheme::default().derive(version)
}
