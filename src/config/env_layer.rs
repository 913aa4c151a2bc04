//! Environment variable layering.
//!
//! The resolver works on one explicit mapping. This module builds that
//! mapping from prioritized layers and remembers which layer supplied each
//! value so `imagetag config -v` can explain a result.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::{ImagetagError, Result};

/// A named set of environment variables.
///
/// # Example
///
/// ```
/// use imagetag::config::EnvLayer;
///
/// let mut layer = EnvLayer::new("ci.env");
/// layer.set("ELASTIC_VERSION", "5.3.0");
///
/// assert_eq!(layer.get("ELASTIC_VERSION"), Some("5.3.0"));
/// assert_eq!(layer.source, "ci.env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    /// Variables in this layer.
    pub vars: HashMap<String, String>,
    /// Source of this layer (for diagnostics).
    pub source: String,
}

impl EnvLayer {
    /// Create a new empty layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            source: source.into(),
        }
    }

    /// Create a layer from an existing map.
    pub fn from_map(source: impl Into<String>, vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            source: source.into(),
        }
    }

    /// Snapshot the current process environment.
    ///
    /// See [`EnvLayer::from_os_vars`] for how non-Unicode variables are handled.
    pub fn from_process(required: &[&str]) -> Result<Self> {
        Self::from_os_vars("process", std::env::vars_os(), required)
    }

    /// Build a layer from raw OS strings.
    ///
    /// Variables that are not valid Unicode are skipped, except those named
    /// in `required`: a required variable that is present but undecodable
    /// fails with `InvalidEnvValue` instead of reading as unset.
    pub fn from_os_vars<I>(source: impl Into<String>, vars: I, required: &[&str]) -> Result<Self>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut layer = Self::new(source);
        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => layer.set(key, value),
                (key, _) => {
                    let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                    if required.contains(&key.as_str()) {
                        return Err(ImagetagError::InvalidEnvValue { key });
                    }
                    tracing::debug!(key = %key, "skipping non-unicode environment variable");
                }
            }
        }
        Ok(layer)
    }

    /// Parse `KEY=VALUE` overrides. The value may be empty; the key may not.
    pub fn from_overrides<S: AsRef<str>>(source: impl Into<String>, overrides: &[S]) -> Result<Self> {
        let mut layer = Self::new(source);
        for raw in overrides {
            let raw = raw.as_ref();
            match raw.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    layer.set(key.trim(), value);
                }
                _ => {
                    return Err(ImagetagError::InvalidOverride {
                        value: raw.to_string(),
                    })
                }
            }
        }
        Ok(layer)
    }

    /// Add a variable to this layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable in this layer only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Check if this layer has a variable.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Get the number of variables in this layer.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Layered environment variables.
///
/// The first layer pushed has lowest priority, the last has highest. A key
/// present in a higher layer wins even when its value is empty.
///
/// # Example
///
/// ```
/// use imagetag::config::{EnvLayer, EnvLayerStack};
///
/// let mut stack = EnvLayerStack::new();
///
/// let mut file = EnvLayer::new(".env");
/// file.set("ELASTIC_VERSION", "5.2.0");
/// file.set("STAGING_BUILD_NUM", "abc");
/// stack.push(file);
///
/// let mut overrides = EnvLayer::new("--set");
/// overrides.set("STAGING_BUILD_NUM", "");
/// stack.push(overrides);
///
/// assert_eq!(stack.get("ELASTIC_VERSION"), Some("5.2.0"));
/// assert_eq!(stack.get("STAGING_BUILD_NUM"), Some(""));
/// assert_eq!(stack.source_of("STAGING_BUILD_NUM"), Some("--set"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayerStack {
    layers: Vec<EnvLayer>,
}

impl EnvLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer above all existing layers.
    pub fn push(&mut self, layer: EnvLayer) {
        tracing::trace!(source = %layer.source, vars = layer.len(), "env layer pushed");
        self.layers.push(layer);
    }

    /// Value from the highest-priority layer containing `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    /// Source of the highest-priority layer containing `key`.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.contains(key))
            .map(|layer| layer.source.as_str())
    }

    /// Flatten all layers into a single mapping.
    pub fn resolve(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();
        for layer in &self.layers {
            result.extend(layer.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        result
    }

    /// All layers, lowest priority first.
    pub fn layers(&self) -> &[EnvLayer] {
        &self.layers
    }

    /// Get the number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
