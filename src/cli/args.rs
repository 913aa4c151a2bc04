//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// imagetag - Resolve the product version and derive container image names.
#[derive(Debug, Parser)]
#[command(name = "imagetag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .imagetag/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Load variables from an env file (below the process environment)
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Override a variable (highest priority, repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Version helper to run when the version variable is unset
    #[arg(long, global = true, value_name = "PATH")]
    pub helper: Option<PathBuf>,

    /// Show where each value came from
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved version
    Resolve(ResolveArgs),

    /// Print display name, image reference and container name (default)
    Names(NamesArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the base version without the staging suffix
    #[arg(long, conflicts_with = "json")]
    pub base: bool,
}

/// Arguments for the `names` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NamesArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "shell")]
    pub json: bool,

    /// Output as KEY=value lines for `eval` or CI env files
    #[arg(long)]
    pub shell: bool,

    /// Variable prefix for --shell output
    #[arg(long, default_value = DEFAULT_PREFIX, value_parser = parse_prefix)]
    pub prefix: String,
}

/// Default variable prefix for `names --shell`.
pub const DEFAULT_PREFIX: &str = "IMAGETAG_";

impl Default for NamesArgs {
    fn default() -> Self {
        Self {
            json: false,
            shell: false,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Accept only prefixes that keep `--shell` keys valid shell identifiers.
fn parse_prefix(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{}' is not a valid variable prefix (expected [A-Za-z_][A-Za-z0-9_]*)",
            s
        ))
    }
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
