//! Error types for imagetag operations.
//!
//! This module defines [`ImagetagError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A variable that is simply not set is an `Option`, never an error
//! - Helper execution failures are the only way version resolution fails
//! - Use `anyhow::Error` (via `ImagetagError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for imagetag operations.
#[derive(Debug, Error)]
pub enum ImagetagError {
    /// The version helper executable could not be located.
    #[error("Version helper not found: {}", .program.display())]
    HelperNotFound { program: PathBuf },

    /// The version helper ran but exited non-zero (or was killed).
    #[error(
        "Version helper {} failed with exit code {code:?}{}",
        .program.display(),
        stderr_suffix(.stderr)
    )]
    HelperFailed {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// The version helper could not be started for a reason other than absence.
    #[error("Failed to run version helper {}: {source}", .program.display())]
    HelperSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version helper succeeded but its stdout is not valid UTF-8.
    #[error("Version helper {} printed invalid output: {message}", .program.display())]
    HelperOutput { program: PathBuf, message: String },

    /// A process variable the resolver reads is not valid Unicode.
    #[error("Environment variable {key} is not valid Unicode")]
    InvalidEnvValue { key: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to read an env file.
    #[error("Failed to load env file {}: {message}", .path.display())]
    EnvFileError { path: PathBuf, message: String },

    /// A `--set` override was not of the form `KEY=VALUE`.
    #[error("Invalid override '{value}': expected KEY=VALUE")]
    InvalidOverride { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagetagError {
    /// Whether this error came from running the version helper.
    pub fn is_execution_error(&self) -> bool {
        matches!(
            self,
            Self::HelperNotFound { .. }
                | Self::HelperFailed { .. }
                | Self::HelperSpawn { .. }
                | Self::HelperOutput { .. }
        )
    }

    /// Whether this error came from loading configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::EnvFileError { .. }
                | Self::InvalidOverride { .. }
                | Self::InvalidEnvValue { .. }
        )
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Result type alias for imagetag operations.
pub type Result<T> = std::result::Result<T, ImagetagError>;
