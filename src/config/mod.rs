//! Configuration for imagetag.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging of project and local config in [`merger`]
//! - `.env` parsing in [`env_file`]
//! - Layered environment variables in [`env_layer`] and [`environment`]
//!
//! # Example
//!
//! ```
//! use imagetag::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".imagetag")).unwrap();
//! fs::write(
//!     temp.path().join(".imagetag").join("config.yml"),
//!     "naming:\n  container_name: logstash-it\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.naming.container_name, "logstash-it");
//! assert_eq!(config.naming.product, "logstash");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.imagetag/config.yml`)
//! 2. Local overrides (`.imagetag/config.local.yml`)
//!
//! Or a single file passed with `--config`.

pub mod env_file;
pub mod env_layer;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use env_file::EnvFileParser;
pub use env_layer::{EnvLayer, EnvLayerStack};
pub use environment::{build_env_stack, EnvSources};
pub use loader::{
    find_project_root, load_config, load_config_file, load_merged_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ImagetagConfig, VersionSettings};
