//! .env file parsing.
//!
//! Env files let CI jobs pin `ELASTIC_VERSION` / `STAGING_BUILD_NUM` without
//! exporting them into the calling shell.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ImagetagError, Result};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=` (kept as an empty value, which still counts as set)
/// - Comments: `# This is a comment`
///
/// # Example
///
/// ```
/// use imagetag::config::EnvFileParser;
///
/// let content = r#"
/// # pinned for the nightly job
/// export ELASTIC_VERSION=5.3.0
/// STAGING_BUILD_NUM="d5b30bd7"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("ELASTIC_VERSION").map(String::as_str), Some("5.3.0"));
/// assert_eq!(vars.get("STAGING_BUILD_NUM").map(String::as_str), Some("d5b30bd7"));
/// assert_eq!(vars.get("EMPTY").map(String::as_str), Some(""));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content. Lines that are not assignments are skipped.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim()).to_string()))
    }

    fn unquote(value: &str) -> &str {
        let bytes = value.as_bytes();
        if bytes.len() >= 2 {
            let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
            if (first == b'"' || first == b'\'') && first == last {
                return &value[1..value.len() - 1];
            }
        }
        value
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path).map_err(|e| ImagetagError::EnvFileError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded env file");
        Ok(Self::parse(&content))
    }

    /// Load and parse an env file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}
