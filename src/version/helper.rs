//! Version-reporting helpers.
//!
//! A helper is consulted only when the configured environment does not carry
//! a version. Anything that can produce a version string (or fail trying)
//! implements [`VersionHelper`]; closures do so automatically.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ImagetagError, Result};
use crate::shell::execute;

/// Default helper location, relative to the project root.
pub const DEFAULT_HELPER: &str = "bin/elastic-version";

/// Something that can report the product version.
pub trait VersionHelper {
    /// Produce the version text.
    ///
    /// Errors are returned as-is by the resolver.
    fn report_version(&self) -> Result<String>;

    /// Short description for logs and [`super::VersionSource::Helper`].
    fn describe(&self) -> String {
        "version helper".to_string()
    }
}

impl<F> VersionHelper for F
where
    F: Fn() -> Result<String>,
{
    fn report_version(&self) -> Result<String> {
        self()
    }
}

/// Runs an executable with no arguments and reports its trimmed stdout.
///
/// # Example
///
/// ```no_run
/// use imagetag::version::{CommandHelper, VersionHelper};
///
/// let helper = CommandHelper::new("./bin/elastic-version");
/// let version = helper.report_version().unwrap();
/// println!("{}", version);
/// ```
#[derive(Debug, Clone)]
pub struct CommandHelper {
    program: PathBuf,
    cwd: Option<PathBuf>,
}

impl CommandHelper {
    /// Create a helper for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: None,
        }
    }

    /// Resolve a configured helper path against a project root.
    ///
    /// Relative paths are joined to `project_root`; the helper also runs
    /// with `project_root` as its working directory.
    pub fn for_project(project_root: &Path, configured: &Path) -> Self {
        let program = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            project_root.join(configured)
        };
        Self {
            program,
            cwd: Some(project_root.to_path_buf()),
        }
    }

    /// Path of the program that will be run.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl VersionHelper for CommandHelper {
    fn report_version(&self) -> Result<String> {
        let result = execute(&self.program, &[], self.cwd.as_deref()).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ImagetagError::HelperNotFound {
                    program: self.program.clone(),
                }
            } else {
                ImagetagError::HelperSpawn {
                    program: self.program.clone(),
                    source: e,
                }
            }
        })?;

        if !result.success {
            return Err(ImagetagError::HelperFailed {
                program: self.program.clone(),
                code: result.exit_code,
                stderr: result.stderr,
            });
        }

        tracing::debug!(
            program = %self.program.display(),
            duration_ms = result.duration.as_millis() as u64,
            "version helper finished"
        );

        let stdout =
            String::from_utf8(result.stdout).map_err(|e| ImagetagError::HelperOutput {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        Ok(stdout.trim().to_string())
    }

    fn describe(&self) -> String {
        self.program.display().to_string()
    }
}
